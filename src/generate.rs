//! Synthetic CSV materialization: widen each source line and stream the
//! result gzip-compressed to disk.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::HarnessError;
use crate::expand;

/// Reads `input` line by line (header included), expands every line to
/// `col_count` comma-joined fields and writes it gzip-compressed to `output`.
///
/// The loop stops only once the running line index exceeds `line_count`, so
/// up to `line_count + 1` lines are emitted. Generated fixtures depend on
/// that boundary; keep it.
pub fn generate_csv(
    input: &Path,
    output: &Path,
    line_count: usize,
    col_count: usize,
) -> Result<(), HarnessError> {
    let reader = BufReader::new(File::open(input)?);
    let mut encoder = GzEncoder::new(File::create(output)?, Compression::default());

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line?;
        if count > line_count {
            break;
        }
        let fields = expand::split_fields(&line);
        encoder.write_all(expand::expand_row(&fields, col_count).as_bytes())?;
        encoder.write_all(b"\n")?;
        count += 1;
    }
    encoder.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn generate(source: &str, line_count: usize, col_count: usize) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("narrow.csv");
        let output = dir.path().join("covid_data_out.csv");
        std::fs::write(&input, source).unwrap();

        generate_csv(&input, &output, line_count, col_count).unwrap();

        let mut decoded = String::new();
        GzDecoder::new(File::open(&output).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        decoded.lines().map(str::to_string).collect()
    }

    #[test]
    fn widens_each_line_to_the_target_count() {
        let lines = generate("uid,name\n1,abc\n2,def\n", 5, 5);
        assert_eq!(
            lines,
            ["uid,name,uid,name,uid", "1,abc,1,abc,1", "2,def,2,def,2"]
        );
    }

    #[test]
    fn emits_one_line_past_the_requested_count() {
        // line_count = 2 keeps line indices 0, 1 and 2: three lines out.
        let lines = generate("h,h\n1,a\n2,b\n3,c\n4,d\n", 2, 2);
        assert_eq!(lines, ["h,h", "1,a", "2,b"]);
    }

    #[test]
    fn short_input_ends_the_stream_early() {
        let lines = generate("h,h\n1,a\n", 100, 4);
        assert_eq!(lines, ["h,h,h,h", "1,a,1,a"]);
    }
}
