use serde_json::json;

use super::{GraphQlSpec, HttpMethod, RestSpec, Scenario};

/// Returns the builtin scenario set in declaration order. The REST and
/// GraphQL sides of each scenario request equivalent data so their
/// measurements are comparable.
#[must_use]
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "simple_user".to_owned(),
            description: "Fetch a single user by id".to_owned(),
            rest: RestSpec {
                method: HttpMethod::Get,
                path: "/users/1".to_owned(),
                params: vec![],
            },
            graphql: GraphQlSpec {
                query: r"
                query GetUser($userId: ID!) {
                    user(id: $userId) {
                        id
                        name
                        email
                    }
                }
                "
                .to_owned(),
                variables: json!({ "userId": "1" }),
            },
        },
        Scenario {
            name: "user_with_posts".to_owned(),
            description: "Fetch a user and their posts".to_owned(),
            rest: RestSpec {
                method: HttpMethod::Get,
                path: "/users/1".to_owned(),
                params: vec![("include".to_owned(), "posts".to_owned())],
            },
            graphql: GraphQlSpec {
                query: r"
                query GetUserWithPosts($userId: ID!) {
                    user(id: $userId) {
                        id
                        name
                        email
                        posts {
                            id
                            title
                            content
                            createdAt
                        }
                    }
                }
                "
                .to_owned(),
                variables: json!({ "userId": "1" }),
            },
        },
        Scenario {
            name: "user_posts_comments".to_owned(),
            description: "Fetch a user, their posts, and each post's comments".to_owned(),
            rest: RestSpec {
                method: HttpMethod::Get,
                path: "/users/1".to_owned(),
                params: vec![("include".to_owned(), "posts,posts.comments".to_owned())],
            },
            graphql: GraphQlSpec {
                query: r"
                query GetUserWithPostsAndComments($userId: ID!) {
                    user(id: $userId) {
                        id
                        name
                        email
                        posts {
                            id
                            title
                            content
                            createdAt
                            comments {
                                id
                                content
                                author {
                                    id
                                    name
                                }
                                createdAt
                            }
                        }
                    }
                }
                "
                .to_owned(),
                variables: json!({ "userId": "1" }),
            },
        },
    ]
}
