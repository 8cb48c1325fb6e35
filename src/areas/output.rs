use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter over the minus pager
///
/// The pager accepts text through `push_str` rather than implementing
/// `std::io::Write`, so commands that write through a boxed writer need
/// this adapter in between. The caller keeps its own `Pager` clone and
/// runs `minus::page_all` once the command has finished writing.
#[derive(new)]
pub struct PagedWriter {
    pager: Pager,
}

impl Write for PagedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
