// Coordination discovery and sentence permutation.
// - Finds constituents joined by commas/conjunctions that may be reordered.
// - Groups reorderable siblings by their parent node, merging chained lists.
// - Generates every combination of per-group orderings, capped for the UI.
use crate::syntax::SyntaxTree;

const CONJUNCTION_LABELS: [&str; 2] = [",", "CC"];
const PERMUTABLE_TAGS: [&str; 9] = ["NP", "NN", "N", "NNS", "ADJP", "UCP", "S", "VP", "VBG"];

// Factorial products get out of hand quickly; the cap bounds both the clone
// work and the size of the results list.
pub const MAX_PERMUTATIONS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutableGroup {
    pub parent: Vec<usize>,
    pub members: Vec<Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSet {
    pub sentences: Vec<String>,
    pub truncated: bool,
}

impl PermutationSet {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }
}

pub fn permuted_sentences(tree: &SyntaxTree) -> PermutationSet {
    let (trees, truncated) = permutations(tree);
    let mut sentences = trees
        .iter()
        .map(SyntaxTree::sentence)
        .collect::<Vec<_>>();
    sentences.sort();
    PermutationSet {
        sentences,
        truncated,
    }
}

pub fn permutations(tree: &SyntaxTree) -> (Vec<SyntaxTree>, bool) {
    let groups = permutable_groups(tree);
    // Groups found deeper in the walk are applied first so nested coordinations
    // permute inside the constituents an outer group later moves around.
    let ordered = groups.iter().rev().collect::<Vec<_>>();

    let mut results = Vec::new();
    let completed = expand(tree.clone(), &ordered, &mut results);
    (results, !completed)
}

pub fn permutable_groups(tree: &SyntaxTree) -> Vec<PermutableGroup> {
    let mut groups = Vec::new();
    let mut path = Vec::new();
    collect_groups(tree, &mut path, &mut groups);
    groups
}

fn collect_groups(
    node: &SyntaxTree,
    path: &mut Vec<usize>,
    groups: &mut Vec<PermutableGroup>,
) {
    let siblings = node.children();
    let mut members: Vec<Vec<usize>> = Vec::new();

    for (index, child) in siblings.iter().enumerate() {
        if !is_permutable(child) {
            continue;
        }

        // Walk the sibling chain to the right: every conjunction followed by
        // another permutable constituent extends this parent's group.
        let mut conj_index = index + 1;
        while siblings.get(conj_index).is_some_and(is_conjunction) {
            let next_index = conj_index + 1;
            if siblings.get(next_index).is_some_and(is_permutable) {
                record_member_pair(&mut members, path, index, next_index);
            }
            conj_index = next_index;
        }
    }

    if !members.is_empty() {
        groups.push(PermutableGroup {
            parent: path.clone(),
            members,
        });
    }

    for (index, child) in siblings.iter().enumerate() {
        path.push(index);
        collect_groups(child, path, groups);
        path.pop();
    }
}

fn record_member_pair(
    members: &mut Vec<Vec<usize>>,
    parent: &[usize],
    node_index: usize,
    next_index: usize,
) {
    let node_path = child_path(parent, node_index);
    let next_path = child_path(parent, next_index);
    if !members.contains(&node_path) {
        members.push(node_path);
    }
    if !members.contains(&next_path) {
        members.push(next_path);
    }
}

fn child_path(parent: &[usize], index: usize) -> Vec<usize> {
    let mut path = parent.to_vec();
    path.push(index);
    path
}

fn is_conjunction(node: &SyntaxTree) -> bool {
    node.label()
        .is_some_and(|label| CONJUNCTION_LABELS.contains(&label))
}

fn is_permutable(node: &SyntaxTree) -> bool {
    node.label()
        .is_some_and(|label| PERMUTABLE_TAGS.contains(&label))
}

// Returns false once the cap cut generation short.
fn expand(tree: SyntaxTree, groups: &[&PermutableGroup], out: &mut Vec<SyntaxTree>) -> bool {
    let Some((group, rest)) = groups.split_first() else {
        if out.len() >= MAX_PERMUTATIONS {
            return false;
        }
        out.push(tree);
        return true;
    };

    let mut members = Vec::with_capacity(group.members.len());
    for member_path in &group.members {
        match tree.node_at(member_path) {
            Some(node) => members.push(node.clone()),
            // A group that no longer matches the tree shape cannot permute;
            // fall through to the remaining groups untouched.
            None => return expand(tree, rest, out),
        }
    }

    for ordering in index_permutations(members.len()) {
        let mut permuted = tree.clone();
        for (member_path, &pick) in group.members.iter().zip(&ordering) {
            if let Some(slot) = permuted.node_at_mut(member_path) {
                *slot = members[pick].clone();
            }
        }
        if !expand(permuted, rest, out) {
            return false;
        }
    }

    true
}

fn index_permutations(len: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    let mut current = Vec::with_capacity(len);
    let mut used = vec![false; len];
    fill_permutations(&mut current, &mut used, &mut all);
    all
}

fn fill_permutations(current: &mut Vec<usize>, used: &mut [bool], all: &mut Vec<Vec<usize>>) {
    if current.len() == used.len() {
        all.push(current.clone());
        return;
    }
    for index in 0..used.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        current.push(index);
        fill_permutations(current, used, all);
        current.pop();
        used[index] = false;
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

    fn parse(input: &str) -> SyntaxTree {
        SyntaxTree::parse(input).unwrap()
    }

    #[test]
    fn tree_without_coordination_yields_identity() {
        let tree = parse("(S (NP (DT the) (NN sky)) (VP (VBZ glows)))");
        assert!(permutable_groups(&tree).is_empty());

        let set = permuted_sentences(&tree);
        assert_eq!(set.sentences, vec!["the sky glows".to_string()]);
        assert!(!set.truncated);
    }

    #[test]
    fn pairwise_coordination_yields_both_orders() {
        let tree = parse("(NP (NP (NN cats)) (CC and) (NP (NN dogs)))");
        let groups = permutable_groups(&tree);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].parent, Vec::<usize>::new());
        assert_eq!(groups[0].members, vec![vec![0], vec![2]]);

        let set = permuted_sentences(&tree);
        assert_eq!(
            set.sentences,
            vec!["cats and dogs".to_string(), "dogs and cats".to_string()]
        );
    }

    #[test]
    fn comma_chain_merges_into_one_group() {
        let tree = parse("(NP (NP (NN ants)) (, ,) (NP (NN bees)) (CC and) (NP (NN wasps)))");
        let groups = permutable_groups(&tree);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, vec![vec![0], vec![2], vec![4]]);

        let set = permuted_sentences(&tree);
        assert_eq!(set.len(), 6);
        assert!(set.sentences.contains(&"ants , bees and wasps".to_string()));
        assert!(set.sentences.contains(&"wasps , bees and ants".to_string()));
        assert!(!set.truncated);
    }

    #[test]
    fn conjunction_without_following_constituent_is_ignored() {
        let tree = parse("(NP (NP (NN cats)) (CC and))");
        assert!(permutable_groups(&tree).is_empty());
    }

    #[test]
    fn nested_coordinations_multiply() {
        let tree = parse(GOTHIC_QUARTER);
        let groups = permutable_groups(&tree);
        let member_counts = groups
            .iter()
            .map(|group| group.members.len())
            .collect::<Vec<_>>();
        assert_eq!(member_counts, vec![2, 3]);

        let set = permuted_sentences(&tree);
        assert_eq!(set.len(), 12);
        assert!(!set.truncated);

        let identity = parse(GOTHIC_QUARTER).sentence();
        assert!(set.sentences.contains(&identity));
        assert!(set.sentences.contains(
            &"The charming Gothic Quarter , or Barri Gòtic , has narrow medieval streets \
              filled with clubs , trendy bars and Catalan restaurants ."
                .to_string()
        ));
        assert!(
            set.sentences.windows(2).all(|pair| pair[0] <= pair[1]),
            "sentences must be sorted"
        );
    }

    #[test]
    fn generation_stops_at_the_cap() {
        // Eight coordinated constituents: 8! = 40320 orderings, far past the cap.
        let mut source = String::from("(NP (NP (NN w0))");
        for index in 1..8 {
            source.push_str(&format!(" (CC and) (NP (NN w{index}))"));
        }
        source.push(')');

        let tree = parse(&source);
        let groups = permutable_groups(&tree);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members.len(), 8);

        let set = permuted_sentences(&tree);
        assert!(set.truncated);
        assert_eq!(set.len(), MAX_PERMUTATIONS);
    }
}
