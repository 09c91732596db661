use crate::{
    error::{Error, Result},
    util::Key,
};
use log::{info, warn};
use rand::Rng;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// The three standard datasets and their sizes.
pub const SMALL: (&str, usize) = ("conjunto_pequeno.txt", 100_000);
pub const MEDIUM: (&str, usize) = ("conjunto_medio.txt", 5_000_000);
pub const LARGE: (&str, usize) = ("conjunto_grande.txt", 30_000_000);

/// Read a file with one decimal integer per line, preserving file order.
///
/// A missing file is not an error: it is logged and read as an empty
/// dataset. A line that is not an integer fails the whole read.
pub fn read_dataset(path: &Path) -> Result<Vec<Key>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Dataset {path:?} not found; skipping dependent benchmarks");
            return Ok(vec![]);
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_owned(),
                source,
            })
        }
    };
    info!("Reading {path:?}..");

    let mut vals = vec![];
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let v = line.trim().parse::<Key>().map_err(|source| Error::Parse {
            path: path.to_owned(),
            line: i + 1,
            content: line.clone(),
            source,
        })?;
        vals.push(v);
    }
    info!("Read {} keys", vals.len());
    Ok(vals)
}

/// `count` uniform keys in `[1, count * 10]`.
pub fn generate_dataset(count: usize, rng: &mut impl Rng) -> Vec<Key> {
    let hi = (count as Key).saturating_mul(10).max(1);
    (0..count).map(|_| rng.gen_range(1..=hi)).collect()
}

/// Write one key per line.
pub fn write_dataset(path: &Path, vals: &[Key]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    for v in vals {
        writeln!(w, "{v}").map_err(io_err)?;
    }
    w.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let vals = read_dataset(&dir.path().join("nope.txt")).unwrap();
        assert!(vals.is_empty());
    }

    #[test]
    fn reads_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("d.txt");
        fs::write(&path, "5\n3\n 8 \n-1\n3\n").unwrap();
        assert_eq!(read_dataset(&path).unwrap(), vec![5, 3, 8, -1, 3]);
    }

    #[test]
    fn malformed_line_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("d.txt");
        fs::write(&path, "1\n2\nthree\n4\n").unwrap();
        match read_dataset(&path) {
            Err(Error::Parse { line, content, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "three");
            }
            r => panic!("expected parse error, got {r:?}"),
        }
    }

    #[test]
    fn generate_write_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.txt");
        let rng = &mut ChaCha8Rng::seed_from_u64(42);
        let vals = generate_dataset(1000, rng);
        assert_eq!(vals.len(), 1000);
        assert!(vals.iter().all(|&v| (1..=10_000).contains(&v)));
        write_dataset(&path, &vals).unwrap();
        assert_eq!(read_dataset(&path).unwrap(), vals);
    }

    #[test]
    fn generation_is_reproducible() {
        let a = generate_dataset(100, &mut ChaCha8Rng::seed_from_u64(7));
        let b = generate_dataset(100, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
