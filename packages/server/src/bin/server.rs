//! Agora chat server binary.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-server
//! cargo run --bin agora-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use agora_server::{
    config::Config,
    domain::{AuthorId, EventBroadcaster, MessageListCache, MessageStore, SessionVerifier},
    infrastructure::{
        broadcaster::WebSocketBroadcaster,
        cache::{InMemoryMessageCache, RedisMessageCache},
        session::InMemorySessionStore,
        store::{InMemoryMessageStore, SqliteMessageStore},
        tasks::LoggingTaskPublisher,
    },
    ui::{Server, state::AppState},
    usecase::{
        ClearMessagesUseCase, DeleteOwnMessagesUseCase, ListMessagesUseCase, PostMessageUseCase,
    },
};
use agora_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Agora chat server with live push updates", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = Config::load();

    // Initialize dependencies in order:
    // 1. Store (backend selected by configuration)
    // 2. Cache
    // 3. Broadcaster, sessions, task sink
    // 4. UseCases
    // 5. AppState
    // 6. Server

    let clock = Arc::new(SystemClock);

    // 1. Message store
    let store: Arc<dyn MessageStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("Using SQLite message store at {}", url);
            match SqliteMessageStore::connect(url, clock.clone()).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!("Failed to open message store: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            tracing::info!("Using in-memory message store");
            Arc::new(InMemoryMessageStore::new(clock))
        }
    };

    // 2. Cache; an unreachable Redis degrades to the in-memory cache
    let cache: Arc<dyn MessageListCache> = match &config.redis_url {
        Some(url) => match RedisMessageCache::connect(url).await {
            Ok(cache) => {
                tracing::info!("Using Redis message cache at {}", url);
                Arc::new(cache)
            }
            Err(e) => {
                tracing::warn!("Redis unavailable, using in-memory cache: {}", e);
                Arc::new(InMemoryMessageCache::new())
            }
        },
        None => Arc::new(InMemoryMessageCache::new()),
    };

    // 3. Connection registry, session seam, task sink
    let broadcaster: Arc<dyn EventBroadcaster> = Arc::new(WebSocketBroadcaster::new());
    let sessions = Arc::new(InMemorySessionStore::new());
    let seeds: Vec<(String, AuthorId)> = config
        .tokens
        .iter()
        .filter_map(|(token, author)| {
            Some((token.clone(), AuthorId::new(author.clone()).ok()?))
        })
        .collect();
    if !seeds.is_empty() {
        tracing::info!("Seeding {} pre-shared session token(s)", seeds.len());
        sessions.seed(seeds).await;
    }
    let tasks = Arc::new(LoggingTaskPublisher);

    // 4. UseCases
    let list_messages_usecase = Arc::new(ListMessagesUseCase::new(
        store.clone(),
        cache.clone(),
        config.cache_ttl,
    ));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(
        store.clone(),
        cache.clone(),
        broadcaster.clone(),
        tasks.clone(),
    ));
    let clear_messages_usecase = Arc::new(ClearMessagesUseCase::new(
        store.clone(),
        cache.clone(),
        broadcaster.clone(),
        tasks.clone(),
    ));
    let delete_own_messages_usecase = Arc::new(DeleteOwnMessagesUseCase::new(
        store,
        cache,
        broadcaster.clone(),
        tasks,
    ));

    // 5. AppState
    let app_state = Arc::new(AppState {
        list_messages_usecase,
        post_message_usecase,
        clear_messages_usecase,
        delete_own_messages_usecase,
        broadcaster,
        sessions: sessions as Arc<dyn SessionVerifier>,
    });

    // 6. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
