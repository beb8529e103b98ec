// Constituency syntax trees and their bracketed text format.
// - Parses Penn-Treebank-style s-expressions into owned trees.
// - Exposes leaf traversal, path-based node access, and sentence assembly.
// - Renders trees back out in single-line and indented multi-line form.
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    Leaf(String),
    Branch {
        label: String,
        children: Vec<SyntaxTree>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected '(' but found `{0}`")]
    ExpectedOpen(String),
    #[error("missing node label after '('")]
    MissingLabel,
    #[error("trailing input after the root node: `{0}`")]
    Trailing(String),
}

impl SyntaxTree {
    pub fn parse(input: &str) -> Result<Self, TreeError> {
        let tokens = tokenize(input);
        let mut cursor = 0;
        let tree = parse_node(&tokens, &mut cursor)?;
        if let Some(extra) = tokens.get(cursor) {
            return Err(TreeError::Trailing(extra.text().to_string()));
        }
        Ok(tree)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch { label, .. } => Some(label),
        }
    }

    pub fn children(&self) -> &[SyntaxTree] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }

    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }

    pub fn sentence(&self) -> String {
        self.leaves().join(" ")
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&SyntaxTree> {
        let mut node = self;
        for &index in path {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    pub(crate) fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut SyntaxTree> {
        let mut node = self;
        for &index in path {
            node = match node {
                Self::Leaf(_) => return None,
                Self::Branch { children, .. } => children.get_mut(index)?,
            };
        }
        Some(node)
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        render_indented(self, 0, &mut out);
        out
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(text) => f.write_str(text),
            Self::Branch { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

impl Token<'_> {
    fn text(&self) -> &str {
        match self {
            Self::Open => "(",
            Self::Close => ")",
            Self::Atom(text) => text,
        }
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut atom_start = None;

    for (index, ch) in input.char_indices() {
        if ch == '(' || ch == ')' || ch.is_whitespace() {
            if let Some(start) = atom_start.take() {
                tokens.push(Token::Atom(&input[start..index]));
            }
            if ch == '(' {
                tokens.push(Token::Open);
            } else if ch == ')' {
                tokens.push(Token::Close);
            }
        } else if atom_start.is_none() {
            atom_start = Some(index);
        }
    }
    if let Some(start) = atom_start {
        tokens.push(Token::Atom(&input[start..]));
    }

    tokens
}

fn parse_node(tokens: &[Token<'_>], cursor: &mut usize) -> Result<SyntaxTree, TreeError> {
    let Some(token) = tokens.get(*cursor) else {
        return Err(TreeError::UnexpectedEnd);
    };
    if *token != Token::Open {
        return Err(TreeError::ExpectedOpen(token.text().to_string()));
    }
    *cursor += 1;

    let label = match tokens.get(*cursor) {
        Some(Token::Atom(text)) => {
            *cursor += 1;
            (*text).to_string()
        }
        Some(_) | None => return Err(TreeError::MissingLabel),
    };

    let mut children = Vec::new();
    loop {
        match tokens.get(*cursor) {
            Some(Token::Close) => {
                *cursor += 1;
                break;
            }
            Some(Token::Open) => children.push(parse_node(tokens, cursor)?),
            Some(Token::Atom(text)) => {
                children.push(SyntaxTree::Leaf((*text).to_string()));
                *cursor += 1;
            }
            None => return Err(TreeError::UnexpectedEnd),
        }
    }

    Ok(SyntaxTree::Branch { label, children })
}

fn collect_leaves<'a>(node: &'a SyntaxTree, leaves: &mut Vec<&'a str>) {
    match node {
        SyntaxTree::Leaf(text) => leaves.push(text),
        SyntaxTree::Branch { children, .. } => {
            for child in children {
                collect_leaves(child, leaves);
            }
        }
    }
}

// Nodes whose flat form fits the width render inline; wider nodes put each
// child on its own indented line so deep parses stay readable in the tree pane.
const PRETTY_WIDTH: usize = 72;

fn render_indented(node: &SyntaxTree, indent: usize, out: &mut String) {
    let flat = node.to_string();
    if indent + flat.chars().count() <= PRETTY_WIDTH {
        out.push_str(&flat);
        return;
    }

    match node {
        SyntaxTree::Leaf(text) => out.push_str(text),
        SyntaxTree::Branch { label, children } => {
            out.push('(');
            out.push_str(label);
            if children.is_empty() {
                out.push(')');
                return;
            }
            for child in children {
                out.push('\n');
                for _ in 0..indent + 2 {
                    out.push(' ');
                }
                render_indented(child, indent + 2, out);
            }
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOTHIC_QUARTER: &str = "
(ROOT
  (S
    (NP
      (NP (DT The) (JJ charming) (JJ Gothic) (NN Quarter))
      (, ,)
      (CC or)
      (NP (NNP Barri) (NNP Gòtic))
      (, ,))
    (VP
      (VBZ has)
      (NP
        (NP (JJ narrow) (JJ medieval) (NNS streets))
        (VP
          (VBN filled)
          (PP
            (IN with)
            (NP
              (NP (JJ trendy) (NNS bars))
              (, ,)
              (NP (NNS clubs))
              (CC and)
              (NP (NNP Catalan) (NNS restaurants)))))))
    (. .)))
";

    #[test]
    fn parses_simple_tree() {
        let tree = SyntaxTree::parse("(S (NP (DT the) (NN sky)) (VP (VBZ glows)))").unwrap();
        assert_eq!(tree.label(), Some("S"));
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.sentence(), "the sky glows");
    }

    #[test]
    fn whitespace_and_newlines_are_insignificant() {
        let tree = SyntaxTree::parse(GOTHIC_QUARTER).unwrap();
        assert_eq!(tree.label(), Some("ROOT"));
        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 23);
        assert_eq!(leaves[0], "The");
        assert_eq!(leaves[7], "Gòtic");
        assert!(tree.sentence().starts_with("The charming Gothic Quarter"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let tree = SyntaxTree::parse(GOTHIC_QUARTER).unwrap();
        let reparsed = SyntaxTree::parse(&tree.to_string()).unwrap();
        assert_eq!(tree, reparsed);
    }

    #[test]
    fn node_at_follows_child_paths() {
        let tree = SyntaxTree::parse("(S (NP (DT the) (NN sky)) (VP (VBZ glows)))").unwrap();
        assert_eq!(tree.node_at(&[]).and_then(SyntaxTree::label), Some("S"));
        assert_eq!(tree.node_at(&[0]).and_then(SyntaxTree::label), Some("NP"));
        assert_eq!(
            tree.node_at(&[0, 1]).and_then(SyntaxTree::label),
            Some("NN")
        );
        assert_eq!(
            tree.node_at(&[0, 1, 0]),
            Some(&SyntaxTree::Leaf("sky".to_string()))
        );
        assert_eq!(tree.node_at(&[5]), None);
        assert_eq!(tree.node_at(&[0, 1, 0, 0]), None);
    }

    #[test]
    fn malformed_input_reports_typed_errors() {
        assert_eq!(SyntaxTree::parse(""), Err(TreeError::UnexpectedEnd));
        assert_eq!(SyntaxTree::parse("   \n "), Err(TreeError::UnexpectedEnd));
        assert_eq!(
            SyntaxTree::parse("cats and dogs"),
            Err(TreeError::ExpectedOpen("cats".to_string()))
        );
        assert_eq!(SyntaxTree::parse("(S (NN a)"), Err(TreeError::UnexpectedEnd));
        assert_eq!(SyntaxTree::parse("()"), Err(TreeError::MissingLabel));
        assert_eq!(
            SyntaxTree::parse("(S (NN a)) extra"),
            Err(TreeError::Trailing("extra".to_string()))
        );
        assert_eq!(
            SyntaxTree::parse("(S (NN a)))"),
            Err(TreeError::Trailing(")".to_string()))
        );
    }

    #[test]
    fn pretty_rendering_splits_wide_nodes() {
        let tree = SyntaxTree::parse(GOTHIC_QUARTER).unwrap();
        let pretty = tree.render_pretty();
        assert!(pretty.lines().count() > 1);
        assert!(pretty.starts_with("(ROOT"));
        // Indented rendering still holds the same content.
        let reparsed = SyntaxTree::parse(&pretty).unwrap();
        assert_eq!(tree, reparsed);
    }

    #[test]
    fn narrow_trees_render_on_one_line() {
        let tree = SyntaxTree::parse("(NP (DT the) (NN sky))").unwrap();
        assert_eq!(tree.render_pretty(), "(NP (DT the) (NN sky))");
    }
}
