use bloglist_core::BlogView;

/// Order blogs by likes, most liked first. Equal likes keep their order.
pub fn rank_by_likes(blogs: &mut [BlogView]) {
    blogs.sort_by(|a, b| b.likes.cmp(&a.likes));
}
