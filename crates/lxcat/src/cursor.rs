/// Forward-only cursor over the lines of a whole file
///
/// LXCat files are small, so the full text is held in memory and split once.
/// Looking ahead is then a plain index lookup rather than a push-back on a
/// stream.
#[derive(Debug)]
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    /// Advances to the next line and returns it
    pub(crate) fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position).copied()?;
        self.position += 1;
        Some(line)
    }

    /// The line that `next_line()` would return, without advancing
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// 1-based number of the line most recently returned
    pub(crate) fn line_number(&self) -> usize {
        self.position
    }
}
