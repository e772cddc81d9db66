use std::fmt::Display;
use std::io::{self, Write};

use super::corpus::Corpus;
use super::guard::header_guard;

pub const INCLUDES: [&str; 3] = ["cstdint", "cstddef", "string"];

/// A C++ header holding the corpus as three index aligned arrays.
#[derive(Debug, Clone)]
pub struct GeneratedHeader<'a> {
    guard_name: String,
    corpus: &'a Corpus,
}

impl<'a> GeneratedHeader<'a> {
    pub fn new(path: &str, corpus: &'a Corpus) -> Self {
        Self {
            guard_name: header_guard(path),
            corpus,
        }
    }

    pub fn guard_name(&self) -> &str {
        &self.guard_name
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let guard = &self.guard_name;
        writeln!(out, "// this is an auto-generated file. Edits will not be preserved.")?;
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out, "#ifndef __cplusplus")?;
        writeln!(out, "#error \"This file is a C++ include.\"")?;
        writeln!(out, "#endif // ifndef __cplusplus")?;
        for include in INCLUDES {
            writeln!(out, "#include <{include}>")?;
        }
        writeln!(
            out,
            "constexpr static std::size_t value_count = {};",
            self.corpus.len()
        )?;

        let vectors = self.corpus.vectors();
        write_array(
            out,
            "std::string",
            "values",
            vectors.iter().map(|v| Quoted(&v.value)),
        )?;
        write_array(
            out,
            "std::uint32_t",
            "ieee_crc32",
            vectors.iter().map(|v| v.ieee_crc32),
        )?;
        write_array(
            out,
            "std::uint32_t",
            "uefi_crc32",
            vectors.iter().map(|v| v.uefi_crc32),
        )?;

        writeln!(out, "#endif // ifndef {guard}")
    }
}

fn write_array<W, I>(out: &mut W, ty: &str, name: &str, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(out, "static {ty} {name}[] = {{")?;
    for item in items {
        writeln!(out, "\t{item},")?;
    }
    writeln!(out, "}};")
}

/// C++ string literal.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check32::crc32::Crc32;
    use crate::check32::custom_crc32::CustomCrc32;
    use crate::check32::CRC32_UEFI;

    fn render(path: &str) -> String {
        let mut ieee = Crc32::new_lookup();
        let mut uefi = CustomCrc32::new_lookup(CRC32_UEFI).unwrap();
        let corpus = Corpus::build(&mut ieee, &mut uefi);
        let mut out = Vec::new();
        GeneratedHeader::new(path, &corpus).render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_preamble() {
        let text = render("build/generated/crc32results.h++");
        let expected = "// this is an auto-generated file. Edits will not be preserved.\n\
            #ifndef AUTOGEN_Build_generated_crc32results_hPP\n\
            #define AUTOGEN_Build_generated_crc32results_hPP\n\
            #ifndef __cplusplus\n\
            #error \"This file is a C++ include.\"\n\
            #endif // ifndef __cplusplus\n\
            #include <cstdint>\n\
            #include <cstddef>\n\
            #include <string>\n\
            constexpr static std::size_t value_count = 4097;\n\
            static std::string values[] = {\n\
            \t\"0\",\n\
            \t\"1\",\n";
        assert!(text.starts_with(expected), "{}", &text[..expected.len()]);
        assert!(text.ends_with("};\n#endif // ifndef AUTOGEN_Build_generated_crc32results_hPP\n"));
    }

    #[test]
    fn test_arrays_are_aligned() {
        let text = render("out.h");
        let mut arrays = Vec::new();
        let mut current: Option<(String, usize)> = None;
        for line in text.lines() {
            if let Some(rest) = line.strip_prefix("static ") {
                let name = rest.split_whitespace().nth(1).unwrap().trim_end_matches("[]");
                current = Some((name.to_owned(), 0));
            } else if line == "};" {
                arrays.push(current.take().unwrap());
            } else if let Some((_, count)) = current.as_mut() {
                *count += 1;
            }
        }
        assert_eq!(
            arrays,
            vec![
                ("values".to_owned(), 4097),
                ("ieee_crc32".to_owned(), 4097),
                ("uefi_crc32".to_owned(), 4097),
            ]
        );
        assert!(text.contains("\t\"123456789\",\n};\nstatic std::uint32_t ieee_crc32[]"));
        assert!(text.contains("\t3421780262,\n};\nstatic std::uint32_t uefi_crc32[]"));
        assert!(text.ends_with("\t3421780262,\n};\n#endif // ifndef AUTOGEN_Out_h\n"));
    }

    #[test]
    fn test_quoting() {
        assert_eq!(Quoted("12").to_string(), "\"12\"");
        assert_eq!(Quoted("a\"b\\c").to_string(), "\"a\\\"b\\\\c\"");
    }
}
