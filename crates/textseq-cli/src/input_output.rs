use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Corpus input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional corpus file, one sentence per line; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Write `rows` as space separated lines.
pub fn write_rows<R, V>(
    writer: &mut dyn Write,
    rows: R,
) -> std::io::Result<()>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = V>,
    V: std::fmt::Display,
{
    for row in rows {
        for (idx, value) in row.into_iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("a.txt".to_string())),
            Some("a.txt".to_string())
        );
    }

    #[test]
    fn test_write_rows() {
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, vec![vec![0, 6, 1, 5], vec![], vec![6]]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 6 1 5\n\n6\n");
    }
}
