//! Pager: one control per page, active page highlighted.

use owo_colors::OwoColorize;

/// Render the page controls.
///
/// Nothing is rendered at one page or fewer. The active page is bracketed
/// and bold; any other number is a jump target.
pub fn pager(page: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    (1..=total_pages)
        .map(|p| {
            if p == page {
                format!("[{}]", p).bold().to_string()
            } else {
                format!(" {} ", p)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_one_page_or_fewer() {
        assert_eq!(pager(1, 0), "");
        assert_eq!(pager(1, 1), "");
    }

    #[test]
    fn one_control_per_page_with_active_highlighted() {
        let rendered = pager(2, 3);
        assert!(rendered.contains("[2]"));
        assert!(rendered.contains(" 1 "));
        assert!(rendered.contains(" 3 "));
        assert!(!rendered.contains("[1]"));
    }
}
