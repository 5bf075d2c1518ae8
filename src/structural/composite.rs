//! Composite: treat single files and whole directory trees uniformly.

/// A node in the tree. Files are leaves; directories hold more nodes and
/// answer the same questions by recursing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { name: String, size: u64 },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    /// Bytes in this node and everything beneath it.
    pub fn total_size(&self) -> u64 {
        match self {
            Node::File { size, .. } => *size,
            Node::Directory { children, .. } => children.iter().map(Node::total_size).sum(),
        }
    }

    /// Number of files (leaves) in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Node::File { .. } => 1,
            Node::Directory { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }

    /// Indented listing, two spaces per level.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Node::File { name, size } => {
                out.push_str(&format!("{pad}{name} ({size} B)\n"));
            }
            Node::Directory { name, children } => {
                out.push_str(&format!("{pad}{name}/\n"));
                for child in children {
                    child.render_into(out, depth + 1);
                }
            }
        }
    }
}

fn sample_tree() -> Node {
    Node::directory(
        "project",
        vec![
            Node::file("README.md", 1_204),
            Node::directory(
                "src",
                vec![Node::file("main.rs", 4_720), Node::file("lib.rs", 310)],
            ),
            Node::directory(
                "assets",
                vec![
                    Node::file("logo.png", 48_120),
                    Node::directory("fonts", vec![Node::file("mono.ttf", 120_400)]),
                ],
            ),
        ],
    )
}

pub fn demo() {
    let tree = sample_tree();
    print!("{}", tree.render());
    println!(
        "{} files, {} bytes total — computed identically for leaf and tree",
        tree.file_count(),
        tree.total_size()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_size_is_its_own() {
        assert_eq!(Node::file("a", 10).total_size(), 10);
    }

    #[test]
    fn test_directory_size_recurses() {
        assert_eq!(sample_tree().total_size(), 1_204 + 4_720 + 310 + 48_120 + 120_400);
    }

    #[test]
    fn test_file_count_counts_leaves_only() {
        assert_eq!(sample_tree().file_count(), 5);
    }

    #[test]
    fn test_render_indents_by_depth() {
        let tree = Node::directory("root", vec![Node::file("leaf", 1)]);
        assert_eq!(tree.render(), "root/\n  leaf (1 B)\n");
    }

    #[test]
    fn test_empty_directory_is_zero_sized() {
        assert_eq!(Node::directory("empty", vec![]).total_size(), 0);
    }
}
