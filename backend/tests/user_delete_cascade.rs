//! End-to-end cascade behaviour when a user is deleted.
//!
//! Removing a user must take their posts, follow edges in either direction,
//! likes and comments with it, plus everything attached to their posts, while
//! leaving other users' data intact.

use rstest::{fixture, rstest};
use social_backend::domain::ports::{
    CommentRepository, FollowRepository, LikeRepository, PostRepository, UserRepository,
};
use social_backend::domain::{NewComment, NewFollow, NewLike, NewPost, NewUser};

mod support;

use support::{TestContext, count_rows, handle_cluster_setup_failure, setup_context};

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn deleting_user_cascades_through_the_graph(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_user_cascades_through_the_graph skipped");
        return;
    };

    let (doomed_post, kept_post) = ctx.runtime.block_on(async {
        let doomed = ctx
            .users
            .create(&NewUser::try_new("doomed@x.io", "pw", true).expect("user"))
            .await
            .expect("create doomed");
        let other = ctx
            .users
            .create(&NewUser::try_new("other@x.io", "pw", true).expect("user"))
            .await
            .expect("create other");

        let doomed_post = ctx
            .posts
            .create(&NewPost::try_new(doomed.id(), "d.png", Some("bye".into())).expect("post"))
            .await
            .expect("doomed post");
        let kept_post = ctx
            .posts
            .create(&NewPost::try_new(other.id(), "o.png", None).expect("post"))
            .await
            .expect("other post");

        ctx.follows
            .create(&NewFollow::new(doomed.id(), other.id()))
            .await
            .expect("doomed follows other");
        ctx.follows
            .create(&NewFollow::new(other.id(), doomed.id()))
            .await
            .expect("other follows doomed");

        // other engages with the doomed post; doomed engages with the kept one.
        ctx.likes
            .create(&NewLike::new(other.id(), doomed_post.id()))
            .await
            .expect("like");
        ctx.comments
            .create(&NewComment::try_new(other.id(), doomed_post.id(), "hi").expect("comment"))
            .await
            .expect("comment");
        ctx.likes
            .create(&NewLike::new(doomed.id(), kept_post.id()))
            .await
            .expect("like");
        ctx.comments
            .create(&NewComment::try_new(doomed.id(), kept_post.id(), "yo").expect("comment"))
            .await
            .expect("comment");
        ctx.likes
            .create(&NewLike::new(other.id(), kept_post.id()))
            .await
            .expect("own like");

        ctx.users.delete(doomed.id()).await.expect("delete user");

        assert!(ctx.users.find_by_id(doomed.id()).await.expect("lookup").is_none());
        assert!(ctx.posts.find_by_id(doomed_post.id()).await.expect("lookup").is_none());
        assert!(ctx.follows.followers_of(other.id()).await.expect("list").is_empty());
        assert!(ctx.follows.followed_by(other.id()).await.expect("list").is_empty());
        assert!(ctx.likes.list_for_user(doomed.id()).await.expect("list").is_empty());
        assert!(ctx.comments.list_for_user(doomed.id()).await.expect("list").is_empty());
        assert!(ctx.likes.list_for_post(doomed_post.id()).await.expect("list").is_empty());

        let kept_likes = ctx.likes.list_for_post(kept_post.id()).await.expect("list");
        assert_eq!(kept_likes.len(), 1);
        assert_eq!(kept_likes[0].user_id(), other.id());
        assert!(ctx.users.find_by_id(other.id()).await.expect("lookup").is_some());

        (doomed_post, kept_post)
    });

    assert_ne!(doomed_post.id(), kept_post.id());
    assert_eq!(count_rows(&ctx.database_url, "user"), Ok(1));
    assert_eq!(count_rows(&ctx.database_url, "post"), Ok(1));
    assert_eq!(count_rows(&ctx.database_url, "follow"), Ok(0));
    assert_eq!(count_rows(&ctx.database_url, "like"), Ok(1));
    assert_eq!(count_rows(&ctx.database_url, "comment"), Ok(0));
}
