use tracing::warn;

/// Where a paginated listing goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor<'a> {
    /// More results exist; echo this cursor back to fetch them.
    Next(&'a str),
    /// The listing is complete.
    Exhausted,
    /// `hasMore` is true but no usable cursor came with it. The vendor broke
    /// the pagination contract; stop paging rather than loop on page one.
    MissingCursor,
}

/// A response envelope returned one page at a time.
///
/// The model decodes pages that break the "`hasMore` implies a cursor"
/// contract without complaint; [`Paginated::next_page`] is where that
/// violation becomes visible to the caller.
pub trait Paginated {
    fn has_more(&self) -> bool;

    /// The raw cursor, if one was sent and is not null.
    fn cursor(&self) -> Option<&str>;

    fn next_page(&self) -> PageCursor<'_> {
        if !self.has_more() {
            return PageCursor::Exhausted;
        }
        match self.cursor() {
            Some(cursor) if !cursor.is_empty() => PageCursor::Next(cursor),
            _ => {
                warn!("response has more pages but carries no pagination cursor");
                PageCursor::MissingCursor
            }
        }
    }
}
