use crate::{
    api::{Attachment, Comment, CommentId, Error, Post, PostId, Roster, UserId},
    forest,
};

/// The in-memory post list and all id allocation.
///
/// Every mutation replaces the affected collection wholesale, so readers
/// never observe a partially-applied update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feed {
    posts: Vec<Post>,
    next_post_id: u64,
    next_comment_id: u64,
}

impl Feed {
    pub fn new() -> Feed {
        Feed {
            posts: Vec::new(),
            next_post_id: 1,
            next_comment_id: 1,
        }
    }

    /// One seeded post per roster user, each with a default comment authored
    /// by the next user round-robin.
    pub fn with_demo_posts(roster: &Roster) -> Feed {
        let mut feed = Feed::new();
        let users: Vec<UserId> = roster.iter().map(|u| u.id).collect();
        for (i, user) in roster.iter().enumerate() {
            let post_id = feed
                .create_post(
                    user.id,
                    format!("This is a post by {}", user.name),
                    Some(Attachment::image(user.avatar.clone())),
                )
                .expect("demo post was rejected");
            let commenter = users[(i + 1) % users.len()];
            feed.add_comment(post_id, None, commenter, "This is a default comment!")
                .expect("demo comment was rejected");
        }
        // restore chronological order: create_post prepends
        feed.posts.reverse();
        feed
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Prepends a new post to the feed. A post with blank content and no
    /// attachment is rejected before any state changes.
    pub fn create_post(
        &mut self,
        author: UserId,
        content: String,
        attachment: Option<Attachment>,
    ) -> Result<PostId, Error> {
        if content.trim().is_empty() && attachment.is_none() {
            return Err(Error::EmptyPost);
        }
        let id = PostId(self.next_post_id);
        self.next_post_id += 1;
        self.posts.insert(
            0,
            Post {
                id,
                author_id: author,
                date: chrono::Utc::now(),
                content,
                attachment,
                likes: Default::default(),
                comments: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Removes `user` from the post's like set if present, inserts it
    /// otherwise. Applying twice returns to the original state.
    pub fn toggle_like(&mut self, post: PostId, user: UserId) -> Result<(), Error> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post)
            .ok_or(Error::UnknownPost(post))?;
        if !post.likes.remove(&user) {
            post.likes.insert(user);
        }
        Ok(())
    }

    /// Adds a comment under `parent` (or at top level for `None`),
    /// allocating its id from the feed-wide monotonic counter so that ids
    /// stay unique within every post's tree.
    pub fn add_comment(
        &mut self,
        post: PostId,
        parent: Option<CommentId>,
        author: UserId,
        text: &str,
    ) -> Result<CommentId, Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyComment);
        }
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post)
            .ok_or(Error::UnknownPost(post))?;
        let id = CommentId(self.next_comment_id);
        let comment = Comment::new(id, author, chrono::Utc::now(), String::from(text));
        match forest::insert_reply(&post.comments, parent, comment) {
            Some(comments) => {
                self.next_comment_id += 1;
                post.comments = comments;
                Ok(id)
            }
            None => {
                let parent = parent.expect("insert_reply without parent cannot fail");
                tracing::warn!(?parent, post=?post.id, "reply parent not found in comment tree");
                Err(Error::UnknownComment(parent))
            }
        }
    }
}

impl Default for Feed {
    fn default() -> Feed {
        Feed::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_one_post() -> (Feed, PostId) {
        let mut feed = Feed::new();
        let post = feed
            .create_post(UserId(1), String::from("hello"), None)
            .unwrap();
        (feed, post)
    }

    #[test]
    fn like_toggle_is_an_involution() {
        let (mut feed, post) = feed_with_one_post();
        let before = feed.clone();
        feed.toggle_like(post, UserId(2)).unwrap();
        assert!(feed.post(post).unwrap().is_liked_by(UserId(2)));
        feed.toggle_like(post, UserId(2)).unwrap();
        assert_eq!(feed, before);
    }

    #[test]
    fn like_unknown_post_is_an_error() {
        let (mut feed, _) = feed_with_one_post();
        assert_eq!(
            feed.toggle_like(PostId(42), UserId(1)),
            Err(Error::UnknownPost(PostId(42)))
        );
    }

    #[test]
    fn blank_posts_are_rejected() {
        let mut feed = Feed::new();
        assert_eq!(
            feed.create_post(UserId(1), String::new(), None),
            Err(Error::EmptyPost)
        );
        assert_eq!(
            feed.create_post(UserId(1), String::from("   "), None),
            Err(Error::EmptyPost)
        );
        assert!(feed.posts().is_empty());

        // an attachment alone is enough
        let res = feed.create_post(
            UserId(1),
            String::new(),
            Some(Attachment::image(String::from("data:image/png;base64,"))),
        );
        assert!(res.is_ok());
        assert_eq!(feed.posts().len(), 1);
    }

    #[test]
    fn new_posts_are_prepended() {
        let mut feed = Feed::new();
        let first = feed
            .create_post(UserId(1), String::from("first"), None)
            .unwrap();
        let second = feed
            .create_post(UserId(2), String::from("second"), None)
            .unwrap();
        let ids: Vec<PostId> = feed.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn comments_get_unique_ids_across_the_tree() {
        let (mut feed, post) = feed_with_one_post();
        let top = feed.add_comment(post, None, UserId(2), "top").unwrap();
        let reply = feed
            .add_comment(post, Some(top), UserId(3), "reply")
            .unwrap();
        let deeper = feed
            .add_comment(post, Some(reply), UserId(1), "deeper")
            .unwrap();
        let mut ids = vec![top, reply, deeper];
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(forest::count_all(&feed.post(post).unwrap().comments), 3);
    }

    #[test]
    fn blank_comments_are_rejected_before_any_mutation() {
        let (mut feed, post) = feed_with_one_post();
        let before = feed.clone();
        assert_eq!(
            feed.add_comment(post, None, UserId(2), "  \n\t"),
            Err(Error::EmptyComment)
        );
        assert_eq!(feed, before);
    }

    #[test]
    fn reply_to_unknown_parent_leaves_feed_unchanged() {
        let (mut feed, post) = feed_with_one_post();
        let before = feed.clone();
        assert_eq!(
            feed.add_comment(post, Some(CommentId(42)), UserId(2), "lost"),
            Err(Error::UnknownComment(CommentId(42)))
        );
        assert_eq!(feed, before);
    }

    #[test]
    fn demo_feed_matches_the_roster() {
        let roster = Roster::builtin();
        let feed = Feed::with_demo_posts(&roster);
        assert_eq!(feed.posts().len(), roster.len());
        for post in feed.posts() {
            assert_eq!(forest::count_all(&post.comments), 1);
            let commenter = post.comments[0].author_id;
            assert_ne!(commenter, post.author_id);
            assert!(roster.get(commenter).is_some());
        }
        // oldest demo post first, author order follows the roster
        let authors: Vec<UserId> = feed.posts().iter().map(|p| p.author_id).collect();
        let roster_ids: Vec<UserId> = roster.iter().map(|u| u.id).collect();
        assert_eq!(authors, roster_ids);
    }
}
