//! Client against a live server bound to a random local port.

use bloglist_client::{rank_by_likes, BlogClient, ClientConfig, ClientError};
use bloglist_core::api::{LoginRequest, NewBlog, NewUser};
use bloglist_core::BlogId;
use server::{app, AppState, ServerConfig};
use tempfile::TempDir;

async fn spawn_server() -> (BlogClient, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        bcrypt_cost: 4,
        jwt_secret: "e2e-secret".to_string(),
        ..ServerConfig::with_base_dir(dir.path())
    };
    let state = AppState::new(config).await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    let client = BlogClient::with_config(ClientConfig::with_base_url(format!("http://{}", addr)))
        .unwrap();
    (client, dir)
}

fn login(username: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: "sekret".to_string(),
    }
}

#[tokio::test]
async fn test_ownership_flow() {
    let (client, _dir) = spawn_server().await;

    client
        .register(&NewUser::new("alice", "Alice", "sekret"))
        .await
        .unwrap();
    client
        .register(&NewUser::new("bob", "Bob", "sekret"))
        .await
        .unwrap();
    let alice = client.login(&login("alice")).await.unwrap();
    let bob = client.login(&login("bob")).await.unwrap();
    assert_eq!(alice.name, "Alice");

    let blog = client
        .create(
            alice.credential(),
            &NewBlog::new("Type wars", "Robert C. Martin", "http://blog.cleancoder.com"),
        )
        .await
        .unwrap();
    assert_eq!(blog.likes, 0);

    let err = client.remove(bob.credential(), blog.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref msg) if msg == "Not creator of the blog"));

    client.remove(alice.credential(), blog.id).await.unwrap();
    let err = client.get(blog.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    let err = client
        .remove(alice.credential(), BlogId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_likes_update_and_ranking() {
    let (client, _dir) = spawn_server().await;
    client
        .register(&NewUser::new("root", "Root", "sekret"))
        .await
        .unwrap();
    let session = client.login(&login("root")).await.unwrap();

    let first = client
        .create(session.credential(), &NewBlog::new("First", "A", "http://a"))
        .await
        .unwrap();
    client
        .create(
            session.credential(),
            &NewBlog::new("Second", "B", "http://b").with_likes(3),
        )
        .await
        .unwrap();

    let liked = client.like(first.id, 10).await.unwrap();
    assert_eq!(liked.likes, 10);
    assert_eq!(liked.user.unwrap().username, "root");

    let mut blogs = client.get_all().await.unwrap();
    rank_by_likes(&mut blogs);
    let titles: Vec<_> = blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_likes, 13);
    assert_eq!(stats.most_likes.unwrap().author, "A");
}

#[tokio::test]
async fn test_errors_are_discriminated() {
    let (client, _dir) = spawn_server().await;

    let err = client
        .register(&NewUser::new("JD", "John Doe", "secure"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(_)));

    let err = client.login(&login("nobody")).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));

    assert!(client.users().await.unwrap().is_empty());
}
