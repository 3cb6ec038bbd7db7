//! Reading input lines and writing sorted output

use crate::error::{SortContext, SortResult};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Read the non-blank lines of `path` through a memory map
pub fn read_lines(path: &Path) -> SortResult<Vec<String>> {
    let name = path.display().to_string();
    let file = File::open(path).with_file_context(&name)?;
    let len = file.metadata().with_file_context(&name)?.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
    Ok(split_lines(&mmap))
}

/// Read the non-blank lines of an arbitrary reader, e.g. stdin
pub fn read_lines_from<R: BufRead>(mut reader: R) -> SortResult<Vec<String>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(split_lines(&data))
}

/// Split raw bytes on newlines, dropping blank lines
fn split_lines(data: &[u8]) -> Vec<String> {
    data.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Write one line per entry to `writer`
pub fn write_lines<T, W>(lines: &[T], writer: W) -> SortResult<()>
where
    T: AsRef<str>,
    W: Write,
{
    let mut out = BufWriter::new(writer);
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Write lines to a file, replacing it
pub fn write_lines_to_file<T: AsRef<str>>(lines: &[T], path: &Path) -> SortResult<()> {
    let name = path.display().to_string();
    let file = File::create(path).with_file_context(&name)?;
    write_lines(lines, file)
}

/// `result_<name>` next to the input file
pub fn result_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());
    input.with_file_name(format!("result_{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use std::io::Cursor;

    #[test]
    fn test_blank_lines_are_dropped() -> SortResult<()> {
        let lines = read_lines_from(Cursor::new("b\n\n  \na\t1\r\n\t\nc"))?;
        assert_eq!(lines, vec!["b", "a\t1", "c"]);
        Ok(())
    }

    #[test]
    fn test_unicode_blank_lines_are_dropped() -> SortResult<()> {
        let lines = read_lines_from(Cursor::new("b\n\u{a0}\n\u{2003} \na\u{a0}\n"))?;
        assert_eq!(lines, vec!["b", "a\u{a0}"]);
        Ok(())
    }

    #[test]
    fn test_read_file() -> SortResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "Mar\nJan\n\nFeb\n")?;

        assert_eq!(read_lines(&path)?, vec!["Mar", "Jan", "Feb"]);
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> SortResult<()> {
        let file = tempfile::NamedTempFile::new()?;
        assert!(read_lines(file.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, SortError::FileNotFound { .. }));
    }

    #[test]
    fn test_write_lines() -> SortResult<()> {
        let mut out = Vec::new();
        write_lines(&["a", "b\t2"], &mut out)?;
        assert_eq!(out, b"a\nb\t2\n");
        Ok(())
    }

    #[test]
    fn test_write_to_file() -> SortResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");
        write_lines_to_file(&["x".to_string(), "y".to_string()], &path)?;
        assert_eq!(std::fs::read_to_string(&path)?, "x\ny\n");
        Ok(())
    }

    #[test]
    fn test_result_path() {
        assert_eq!(
            result_path(Path::new("dir/data.txt")),
            PathBuf::from("dir/result_data.txt")
        );
        assert_eq!(result_path(Path::new("data.txt")), PathBuf::from("result_data.txt"));
    }
}
