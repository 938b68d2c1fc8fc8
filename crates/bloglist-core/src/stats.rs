//! Aggregate statistics over a collection of blogs.
//!
//! All functions are pure folds over the input slice. Grouping by author
//! keeps authors in the order they are first seen, and every maximum is
//! only replaced on a strictly greater value, so ties resolve to the
//! earliest candidate in input order. Sums saturate at `u64::MAX`.

use crate::models::BlogRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Projection of the most liked blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Every statistic at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    pub total_likes: u64,
    pub favourite_blog: Option<FavouriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of likes. 0 for an empty collection.
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs.iter().fold(0, |sum: u64, blog| sum.saturating_add(blog.likes))
}

/// The blog with the most likes; the first one wins a tie.
pub fn favourite_blog(blogs: &[BlogRecord]) -> Option<FavouriteBlog> {
    let (first, rest) = blogs.split_first()?;
    let favourite = rest
        .iter()
        .fold(first, |max, next| if next.likes > max.likes { next } else { max });

    Some(FavouriteBlog {
        title: favourite.title.clone(),
        author: favourite.author.clone(),
        likes: favourite.likes,
    })
}

/// Number of blogs per author, in first-seen author order.
pub fn blogs_by_author(blogs: &[BlogRecord]) -> Vec<AuthorBlogs> {
    group_by_author(blogs, |_| 1)
        .into_iter()
        .map(|(author, blogs)| AuthorBlogs { author, blogs })
        .collect()
}

/// Sum of likes per author, in first-seen author order.
pub fn likes_by_author(blogs: &[BlogRecord]) -> Vec<AuthorLikes> {
    group_by_author(blogs, |blog| blog.likes)
        .into_iter()
        .map(|(author, likes)| AuthorLikes { author, likes })
        .collect()
}

/// Author with the most blogs.
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorBlogs> {
    max_first_seen(blogs_by_author(blogs), |entry| entry.blogs)
}

/// Author whose blogs collected the most likes.
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorLikes> {
    max_first_seen(likes_by_author(blogs), |entry| entry.likes)
}

pub fn summarize(blogs: &[BlogRecord]) -> BlogStats {
    BlogStats {
        total_likes: total_likes(blogs),
        favourite_blog: favourite_blog(blogs),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

fn group_by_author<F>(blogs: &[BlogRecord], weight: F) -> Vec<(String, u64)>
where
    F: Fn(&BlogRecord) -> u64,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, u64)> = Vec::new();

    for blog in blogs {
        match index.get(blog.author.as_str()) {
            Some(&slot) => {
                let total = &mut groups[slot].1;
                *total = total.saturating_add(weight(blog));
            }
            None => {
                index.insert(blog.author.as_str(), groups.len());
                groups.push((blog.author.clone(), weight(blog)));
            }
        }
    }

    groups
}

fn max_first_seen<T, F>(entries: Vec<T>, key: F) -> Option<T>
where
    F: Fn(&T) -> u64,
{
    entries.into_iter().fold(None, |best, next| match best {
        Some(best) if key(&next) <= key(&best) => Some(best),
        _ => Some(next),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, author: &str, likes: u64) -> BlogRecord {
        BlogRecord::new(title, author, format!("https://{}.example", title), likes, None)
    }

    fn sample() -> Vec<BlogRecord> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(
            total_likes(&[blog("a", "X", 5), blog("b", "Y", 0), blog("c", "Z", 3)]),
            8
        );
        assert_eq!(total_likes(&sample()), 36);
    }

    #[test]
    fn test_total_likes_treats_missing_likes_as_zero() {
        let raw = serde_json::json!([
            { "id": crate::BlogId::new(), "title": "a", "author": "X", "url": "u", "likes": 4 },
            { "id": crate::BlogId::new(), "title": "b", "author": "Y", "url": "u" }
        ]);
        let blogs: Vec<BlogRecord> = serde_json::from_value(raw).unwrap();
        assert_eq!(total_likes(&blogs), 4);
    }

    #[test]
    fn test_huge_like_counts_saturate() {
        let max = i64::MAX as u64;
        let blogs = vec![blog("a", "X", max), blog("b", "X", max), blog("c", "Y", max)];

        assert_eq!(total_likes(&blogs), u64::MAX);
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "X".to_string(),
                likes: u64::MAX,
            })
        );

        let stats = summarize(&blogs);
        assert_eq!(stats.total_likes, u64::MAX);
        assert_eq!(stats.favourite_blog.unwrap().title, "a");
    }

    #[test]
    fn test_favourite_blog() {
        assert_eq!(favourite_blog(&[]), None);

        let single = favourite_blog(&[blog("Only", "X", 0)]).unwrap();
        assert_eq!(single.title, "Only");

        let fav = favourite_blog(&sample()).unwrap();
        assert_eq!(
            fav,
            FavouriteBlog {
                title: "Canonical string reduction".to_string(),
                author: "Edsger W. Dijkstra".to_string(),
                likes: 12,
            }
        );
    }

    #[test]
    fn test_favourite_blog_tie_keeps_first() {
        let fav = favourite_blog(&[blog("A", "X", 5), blog("B", "Y", 5)]).unwrap();
        assert_eq!(
            fav,
            FavouriteBlog {
                title: "A".to_string(),
                author: "X".to_string(),
                likes: 5,
            }
        );
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(most_blogs(&[]), None);
        assert_eq!(
            most_blogs(&sample()),
            Some(AuthorBlogs {
                author: "Robert C. Martin".to_string(),
                blogs: 3,
            })
        );
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(most_likes(&[]), None);
        assert_eq!(
            most_likes(&sample()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            })
        );
    }

    #[test]
    fn test_dominant_author_wins_both() {
        let blogs = vec![
            blog("a", "X", 1),
            blog("b", "Y", 10),
            blog("c", "Y", 3),
            blog("d", "Z", 2),
        ];
        assert_eq!(most_blogs(&blogs).unwrap().author, "Y");
        assert_eq!(most_likes(&blogs).unwrap().author, "Y");
    }

    #[test]
    fn test_author_ties_go_to_first_seen() {
        let blogs = vec![blog("a", "X", 3), blog("b", "Y", 2), blog("c", "Y", 1)];
        // X and Y both have 3 likes; Y has more blogs.
        assert_eq!(most_likes(&blogs).unwrap().author, "X");
        assert_eq!(most_blogs(&blogs).unwrap().author, "Y");

        let even = vec![blog("a", "Y", 1), blog("b", "X", 1)];
        assert_eq!(most_blogs(&even).unwrap().author, "Y");
    }

    #[test]
    fn test_per_author_likes_add_up_to_total() {
        let cases = vec![vec![], sample(), vec![blog("a", "", 4), blog("b", "", 0)]];
        for blogs in cases {
            let per_author: u64 = likes_by_author(&blogs).iter().map(|e| e.likes).sum();
            assert_eq!(per_author, total_likes(&blogs));
        }
    }

    #[test]
    fn test_blogs_by_author_keeps_first_seen_order() {
        let authors: Vec<_> = blogs_by_author(&sample())
            .into_iter()
            .map(|e| e.author)
            .collect();
        assert_eq!(
            authors,
            vec!["Michael Chan", "Edsger W. Dijkstra", "Robert C. Martin"]
        );
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_likes, 0);
        assert!(stats.favourite_blog.is_none());
        assert!(stats.most_blogs.is_none());
        assert!(stats.most_likes.is_none());
    }
}
