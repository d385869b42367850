use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::GenericMatrix;

/// Columns right-aligned to their widest entry, one bracketed line per text
/// line.
///
/// Elements that print on several lines, such as matrix blocks, stack
/// side by side: a row is as tall as its tallest element. A precision
/// (`{:.3}`) is forwarded to every element.
impl<T: fmt::Display> fmt::Display for GenericMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n) = (self.nrows, self.ncols);

        // Row-major cells
        let cells: Vec<String> = (0..m * n)
            .map(|k| {
                let e = &self[(k / n, k % n)];
                match f.precision() {
                    Some(p) => format!("{:.*}", p, e),
                    None => format!("{}", e),
                }
            })
            .collect();

        let mut widths: Vec<usize> = alloc::vec![0; n];
        for (k, cell) in cells.iter().enumerate() {
            for line in cell.lines() {
                widths[k % n] = widths[k % n].max(line.chars().count());
            }
        }

        let mut first = true;
        for i in 0..m {
            let row = &cells[i * n..(i + 1) * n];
            let height = row.iter().map(|c| c.lines().count()).max().unwrap_or(0).max(1);
            for h in 0..height {
                if !first {
                    writeln!(f)?;
                }
                first = false;
                write!(f, "│")?;
                for (j, cell) in row.iter().enumerate() {
                    if j > 0 {
                        write!(f, "  ")?;
                    }
                    let line = cell.lines().nth(h).unwrap_or("");
                    write!(f, "{:>width$}", line, width = widths[j])?;
                }
                write!(f, "│")?;
            }
        }
        Ok(())
    }
}
