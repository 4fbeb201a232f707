//! Pure transforms over a post's comment forest.
//!
//! All functions here take the forest by reference and return a fresh one;
//! the input is never mutated. Traversal order is depth-first, parent before
//! children, and sibling order is always preserved.

use crate::api::{Comment, CommentId};

/// Inserts `reply` into the forest.
///
/// With `parent == None` the reply is appended as the last top-level
/// comment. Otherwise it is appended to the replies of the first node whose
/// id matches in depth-first order, and traversal stops there; ids are
/// allocated by `Feed` from a monotonic counter, so at most one node can
/// match anyway. Returns `None`, leaving the forest untouched, when no node
/// matches.
pub fn insert_reply(
    forest: &[Comment],
    parent: Option<CommentId>,
    reply: Comment,
) -> Option<Vec<Comment>> {
    let parent = match parent {
        None => {
            let mut res = forest.to_vec();
            res.push(reply);
            return Some(res);
        }
        Some(p) => p,
    };
    let mut res = forest.to_vec();
    match insert_under(&mut res, parent, reply) {
        true => Some(res),
        false => None,
    }
}

fn insert_under(forest: &mut [Comment], parent: CommentId, reply: Comment) -> bool {
    for c in forest.iter_mut() {
        if c.id == parent {
            c.replies.push(reply);
            return true;
        }
        if insert_under(&mut c.replies, parent, reply.clone()) {
            return true;
        }
    }
    false
}

/// Total number of comments in the forest, every node at every depth
/// counted exactly once.
pub fn count_all(forest: &[Comment]) -> usize {
    forest.iter().map(|c| 1 + count_all(&c.replies)).sum()
}

/// Depth-first lookup of a single comment by id.
pub fn find(forest: &[Comment], id: CommentId) -> Option<&Comment> {
    for c in forest {
        if c.id == id {
            return Some(c);
        }
        if let Some(res) = find(&c.replies, id) {
            return Some(res);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserId;

    fn comment(id: u64, text: &str) -> Comment {
        Comment::new(
            CommentId(id),
            UserId(1),
            chrono::Utc::now(),
            String::from(text),
        )
    }

    /// A forest shaped like:
    ///   1
    ///   ├── 2
    ///   │   └── 4
    ///   └── 3
    ///   5
    fn example_forest() -> Vec<Comment> {
        let mut c1 = comment(1, "first");
        let mut c2 = comment(2, "second");
        c2.replies.push(comment(4, "fourth"));
        c1.replies.push(c2);
        c1.replies.push(comment(3, "third"));
        vec![c1, comment(5, "fifth")]
    }

    fn depth_first_ids(forest: &[Comment]) -> Vec<u64> {
        let mut res = Vec::new();
        fn walk(forest: &[Comment], res: &mut Vec<u64>) {
            for c in forest {
                res.push(c.id.0);
                walk(&c.replies, res);
            }
        }
        walk(forest, &mut res);
        res
    }

    #[test]
    fn count_matches_depth_first_walk() {
        assert_eq!(count_all(&[]), 0);
        let forest = example_forest();
        assert_eq!(count_all(&forest), depth_first_ids(&forest).len());
        assert_eq!(count_all(&forest), 5);
    }

    #[test]
    fn top_level_append_goes_last_and_touches_nothing() {
        let forest = example_forest();
        let res = insert_reply(&forest, None, comment(6, "sixth")).unwrap();
        assert_eq!(res.len(), forest.len() + 1);
        assert_eq!(res.last().unwrap().id, CommentId(6));
        // every pre-existing tree is bit-for-bit unchanged
        assert_eq!(&res[..forest.len()], &forest[..]);
    }

    #[test]
    fn nested_insert_grows_count_by_one_and_keeps_order() {
        let forest = example_forest();
        let before = depth_first_ids(&forest);
        let res = insert_reply(&forest, Some(CommentId(2)), comment(6, "sixth")).unwrap();
        assert_eq!(count_all(&res), count_all(&forest) + 1);
        let after: Vec<u64> = depth_first_ids(&res)
            .into_iter()
            .filter(|id| *id != 6)
            .collect();
        assert_eq!(after, before);
        let parent = find(&res, CommentId(2)).unwrap();
        assert_eq!(parent.replies.last().unwrap().id, CommentId(6));
    }

    #[test]
    fn insert_at_arbitrary_depth() {
        let mut forest = example_forest();
        // grow a chain 10 levels under comment 4
        let mut parent = 4;
        for id in 10..20 {
            forest = insert_reply(&forest, Some(CommentId(parent)), comment(id, "deep")).unwrap();
            parent = id;
        }
        assert_eq!(count_all(&forest), 15);
        assert!(find(&forest, CommentId(19)).is_some());
    }

    #[test]
    fn unknown_parent_is_an_error_not_a_silent_drop() {
        let forest = example_forest();
        assert!(insert_reply(&forest, Some(CommentId(42)), comment(6, "lost")).is_none());
    }

    #[test]
    fn insert_stops_at_first_match() {
        // Duplicate ids cannot come out of Feed, but if one is ever built by
        // hand the reply must land on the first depth-first match only.
        let mut dup = comment(7, "outer");
        dup.replies.push(comment(7, "inner"));
        let forest = vec![dup];
        let res = insert_reply(&forest, Some(CommentId(7)), comment(8, "reply")).unwrap();
        assert_eq!(count_all(&res), 3);
        assert_eq!(res[0].replies.len(), 2);
        assert!(res[0].replies[0].replies.is_empty());
    }

    #[test]
    fn input_forest_is_never_mutated() {
        let forest = example_forest();
        let snapshot = forest.clone();
        let _ = insert_reply(&forest, Some(CommentId(4)), comment(6, "sixth"));
        let _ = insert_reply(&forest, None, comment(7, "seventh"));
        assert_eq!(forest, snapshot);
    }
}
