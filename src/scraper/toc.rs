use crate::models::TocNode;

/// Section landing pages share this title and carry no endpoint data.
const OVERVIEW: &str = "Overview";

/// Depth-first walk returning every leaf except section overviews, children
/// before following siblings.
pub fn collect_leaves(nodes: &[TocNode]) -> Vec<&TocNode> {
    let mut leaves = Vec::new();
    collect_into(nodes, &mut leaves);
    leaves
}

fn collect_into<'a>(nodes: &'a [TocNode], leaves: &mut Vec<&'a TocNode>) {
    for node in nodes {
        if node.is_leaf() {
            if node.title != OVERVIEW {
                leaves.push(node);
            }
        } else {
            collect_into(&node.children, leaves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str) -> TocNode {
        TocNode {
            title: title.to_string(),
            link: Some(format!("core/{}", title.to_lowercase())),
            children: vec![],
        }
    }

    fn section(title: &str, children: Vec<TocNode>) -> TocNode {
        TocNode {
            title: title.to_string(),
            link: None,
            children,
        }
    }

    fn titles(leaves: &[&TocNode]) -> Vec<String> {
        leaves.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn skips_overview_and_descends_into_subsections() {
        let toc = vec![section(
            "Projects",
            vec![
                leaf("Overview"),
                leaf("List"),
                section("Properties", vec![leaf("Get")]),
            ],
        )];
        assert_eq!(titles(&collect_leaves(&toc)), vec!["List", "Get"]);
    }

    #[test]
    fn children_come_before_following_siblings() {
        let toc = vec![
            section("A", vec![section("A1", vec![leaf("a")]), leaf("b")]),
            leaf("c"),
            section("B", vec![]),
        ];
        // An empty section is itself a leaf.
        assert_eq!(titles(&collect_leaves(&toc)), vec!["a", "b", "c", "B"]);
    }

    #[test]
    fn empty_tree_has_no_leaves() {
        assert!(collect_leaves(&[]).is_empty());
    }
}
