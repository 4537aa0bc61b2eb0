//! Shared helpers: spawn the server with a given LLM and static dir.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use triptych::{BufferMemory, MockLlm, Pipeline};

pub struct TestServer {
    pub base_url: String,
    pub memory: Arc<BufferMemory>,
    pub llm: Arc<MockLlm>,
}

/// Binds 127.0.0.1:0, spawns the server in the background, returns its base URL.
pub async fn spawn_server(llm: MockLlm, static_dir: &Path) -> TestServer {
    let llm = Arc::new(llm);
    let memory = Arc::new(BufferMemory::new());
    let pipeline = Arc::new(Pipeline::new(llm.clone(), memory.clone()));
    let state = Arc::new(serve::AppState::new(pipeline).with_static_dir(static_dir));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve::run_serve_on_listener(listener, state));

    TestServer {
        base_url: format!("http://{}", addr),
        memory,
        llm,
    }
}
