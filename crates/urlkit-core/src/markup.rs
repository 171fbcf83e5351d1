//! HTML comment stripping, including legacy conditional comments.

const OPEN: &str = "<!--";
const CLOSE: &str = "-->";

/// Removes every `<!-- ... -->` block from `markup`.
///
/// Each block ends at the first `-->` after its `<!--`, so two comments on one
/// line are removed separately and the text between them survives. An opening
/// `<!--` without a matching `-->` is kept, together with everything after it.
///
/// # Examples
///
/// - `remove_html_comments("abc<!--[if lt IE 8]>aaaa<![endif]-->def")` → `"abcdef"`
/// - `remove_html_comments("abc<!--[if lt IE 8]>aa-->bb<!--aa<![endif]-->def")` → `"abcbbdef"`
pub fn remove_html_comments(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find(OPEN) {
        let body = &rest[start + OPEN.len()..];
        let Some(end) = body.find(CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &body[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_comment() {
        assert_eq!(
            remove_html_comments("abc<!--[if lt IE 8]>aaaa<![endif]-->def"),
            "abcdef"
        );
    }

    #[test]
    fn two_comments_on_one_line_are_not_merged() {
        assert_eq!(
            remove_html_comments("abc<!--[if lt IE 8]>aa-->bb<!--aa<![endif]-->def"),
            "abcbbdef"
        );
    }

    #[test]
    fn back_to_back_comments() {
        assert_eq!(remove_html_comments("a<!--x--><!--y-->b"), "ab");
    }

    #[test]
    fn dashes_inside_body() {
        assert_eq!(remove_html_comments("a<!-- x - y -- z ->-->b"), "ab");
    }

    #[test]
    fn unterminated_comment_kept() {
        assert_eq!(remove_html_comments("a<!--b-->c<!--d"), "ac<!--d");
        assert_eq!(remove_html_comments("<!--"), "<!--");
    }

    #[test]
    fn no_comments() {
        assert_eq!(remove_html_comments(""), "");
        assert_eq!(remove_html_comments("plain -> text"), "plain -> text");
    }

    #[test]
    fn multiline_and_non_ascii() {
        assert_eq!(
            remove_html_comments("é<!--[if IE]>\n<p>ü</p>\n<![endif]-->ß"),
            "éß"
        );
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let once = remove_html_comments("x<!--a-->y<!--b-->z");
        assert_eq!(remove_html_comments(&once), once);
    }
}
