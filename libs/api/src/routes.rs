//! URL builders for the posts resource.
//!
//! Pure functions from (base endpoint, id) to URL strings, one module per
//! verb group. Ids accept any displayable value so malformed ids can be
//! exercised by negative tests.

pub mod read {
    use std::fmt::Display;

    /// GET /posts
    pub fn all_posts(base: &str) -> String {
        format!("{base}/posts")
    }

    /// GET /posts/{id}
    pub fn post_by_id(base: &str, id: impl Display) -> String {
        format!("{base}/posts/{id}")
    }
}

pub mod create {
    /// POST /posts
    pub fn posts(base: &str) -> String {
        format!("{base}/posts")
    }
}

pub mod update {
    use std::fmt::Display;

    /// PUT /posts/{id}
    pub fn put_post(base: &str, id: impl Display) -> String {
        format!("{base}/posts/{id}")
    }

    /// PATCH /posts/{id}
    pub fn patch_post(base: &str, id: impl Display) -> String {
        format!("{base}/posts/{id}")
    }
}

pub mod delete {
    use std::fmt::Display;

    /// DELETE /posts/{id}
    pub fn post_by_id(base: &str, id: impl Display) -> String {
        format!("{base}/posts/{id}")
    }
}
