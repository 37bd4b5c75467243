//! Parser for the argument lists embedded in `rdfs:comment` annotations.
//!
//! A comment carries at most one bracketed, semicolon-delimited list:
//!
//! ```text
//! Parameters: [truck;pkg]     -> ?truck ?pkg
//! Objects: [truck1;pkg7]      -> truck1 pkg7
//! Mixed: [?truck;depot]       -> ?truck depot
//! ```
//!
//! The parser only extracts tokens. They are kept as written except that
//! empty tokens (`[a;;b]`, `[x;]`, `[]`) are dropped, so `[a;;b]` renders
//! like `[a;b]`. Rendering them (the `?` prefix for parameters) is done by
//! the serializers.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from comment parsing.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum CommentError {
    #[error("entity has no comment")]
    #[diagnostic(
        code(shop::comment::missing),
        help("Add an rdfs:comment such as \"Parameters: [x;y]\".")
    )]
    Missing,

    #[error("comment has no \"{tag}: [\" list")]
    #[diagnostic(
        code(shop::comment::missing_tag),
        help("The comment must contain \"{tag}: [\" followed by the list and a closing \"]\".")
    )]
    MissingTag { tag: ListTag },

    #[error("\"{tag}: [\" list is not closed")]
    #[diagnostic(
        code(shop::comment::unterminated),
        help("Add the closing \"]\" after the last {tag} entry.")
    )]
    Unterminated { tag: ListTag },

    #[error("unknown argument mode \"{mode}\"")]
    #[diagnostic(
        code(shop::comment::unknown_mode),
        help(
            "A specialization's comment must start with \"Parameters:\", \
             \"Objects:\" or \"Mixed:\"."
        )
    )]
    UnknownMode { mode: String },
}

pub type CommentResult<T> = std::result::Result<T, CommentError>;

/// The three list kinds of the comment mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTag {
    /// Variables, rendered `?name`.
    Parameters,
    /// Constants, rendered bare.
    Objects,
    /// Pre-rendered tokens, emitted as written.
    Mixed,
}

impl ListTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ListTag::Parameters => "Parameters",
            ListTag::Objects => "Objects",
            ListTag::Mixed => "Mixed",
        }
    }

    /// Text written in front of each token of this list.
    pub fn token_prefix(self) -> &'static str {
        match self {
            ListTag::Parameters => " ?",
            ListTag::Objects | ListTag::Mixed => " ",
        }
    }

    fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "Parameters" => Some(ListTag::Parameters),
            "Objects" => Some(ListTag::Objects),
            "Mixed" => Some(ListTag::Mixed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The argument mode declared by a comment: the text before its first `:`.
pub fn argument_mode(comment: &str) -> CommentResult<ListTag> {
    let mode = comment.split(':').next().unwrap_or(comment);
    ListTag::from_mode(mode).ok_or_else(|| CommentError::UnknownMode {
        mode: mode.to_string(),
    })
}

/// Extract the tokens of the `<tag>: [...]` list.
///
/// The list ends at the first `]` after the opening bracket. Tokens are
/// returned verbatim; empty tokens are skipped.
pub fn extract_list(comment: &str, tag: ListTag) -> CommentResult<Vec<&str>> {
    let opening = format!("{tag}: [");
    let start = comment
        .find(&opening)
        .ok_or(CommentError::MissingTag { tag })?
        + opening.len();
    let rest = &comment[start..];
    let end = rest.find(']').ok_or(CommentError::Unterminated { tag })?;

    Ok(rest[..end].split(';').filter(|t| !t.is_empty()).collect())
}

/// Render a list with the per-token prefix of its tag.
pub fn render_list(tokens: &[&str], tag: ListTag) -> String {
    let prefix = tag.token_prefix();
    let mut out = String::new();
    for token in tokens {
        out.push_str(prefix);
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_parameters() {
        let tokens = extract_list("Parameters: [truck;pkg]", ListTag::Parameters).unwrap();
        assert_eq!(tokens, vec!["truck", "pkg"]);
    }

    #[test]
    fn list_may_follow_other_text() {
        let comment = "The load action. Objects: [truck1;pkg7] (see docs)";
        let tokens = extract_list(comment, ListTag::Objects).unwrap();
        assert_eq!(tokens, vec!["truck1", "pkg7"]);
    }

    #[test]
    fn closing_bracket_is_searched_after_the_tag() {
        let comment = "[note] Mixed: [?x;home]";
        let tokens = extract_list(comment, ListTag::Mixed).unwrap();
        assert_eq!(tokens, vec!["?x", "home"]);
    }

    #[test]
    fn tokens_are_verbatim() {
        let tokens = extract_list("Objects: [a; b]", ListTag::Objects).unwrap();
        assert_eq!(tokens, vec!["a", " b"]);
    }

    #[test]
    fn empty_tokens_are_skipped() {
        assert!(extract_list("Parameters: []", ListTag::Parameters).unwrap().is_empty());
        assert_eq!(
            extract_list("Parameters: [x;]", ListTag::Parameters).unwrap(),
            vec!["x"]
        );
        let tokens = extract_list("Objects: [a;;b]", ListTag::Objects).unwrap();
        assert_eq!(render_list(&tokens, ListTag::Objects), " a b");
    }

    #[test]
    fn missing_tag_is_reported() {
        let err = extract_list("Objects: [a]", ListTag::Parameters).unwrap_err();
        assert_eq!(
            err,
            CommentError::MissingTag {
                tag: ListTag::Parameters
            }
        );
    }

    #[test]
    fn unterminated_list_is_reported() {
        let err = extract_list("Parameters: [a;b", ListTag::Parameters).unwrap_err();
        assert_eq!(
            err,
            CommentError::Unterminated {
                tag: ListTag::Parameters
            }
        );
    }

    #[test]
    fn argument_mode_reads_text_before_colon() {
        assert_eq!(argument_mode("Objects: [a;b]").unwrap(), ListTag::Objects);
        assert_eq!(argument_mode("Parameters: [x]").unwrap(), ListTag::Parameters);
        assert_eq!(argument_mode("Mixed: [?x;a]").unwrap(), ListTag::Mixed);
    }

    #[test]
    fn argument_mode_rejects_prose() {
        let err = argument_mode("Loads a package: Objects: [a]").unwrap_err();
        assert!(matches!(err, CommentError::UnknownMode { mode } if mode == "Loads a package"));
        assert!(argument_mode("objects: [a]").is_err());
    }

    #[test]
    fn rendering_prefixes_tokens() {
        assert_eq!(render_list(&["x", "y"], ListTag::Parameters), " ?x ?y");
        assert_eq!(render_list(&["a", "b"], ListTag::Objects), " a b");
        assert_eq!(render_list(&["?x", "b"], ListTag::Mixed), " ?x b");
        assert_eq!(render_list(&[], ListTag::Objects), "");
    }
}
