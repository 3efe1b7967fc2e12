//! End-to-end test of `BundleBackend` against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every backend
//! operation over real HTTP through a ureq-backed `Transport`.

use std::future::Future;

use glyph_core::{
    BackendError, BackendService, BundleBackend, DecodeError, FontIdentity, HttpMethod, HttpRequest,
    HttpResponse, Transport, TransportError,
};

/// Blocking ureq transport. Status codes are returned as data and mapped
/// through `HttpResponse::error_for_status`.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn execute(&self, req: HttpRequest) -> Result<Vec<u8>, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&req.url);
                for (k, v) in &req.headers {
                    builder = builder.header(k.as_str(), v.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.url);
                for (k, v) in &req.headers {
                    builder = builder.header(k.as_str(), v.as_str());
                }
                builder.send(body.unwrap_or_default().as_bytes())
            }
        };
        let mut response = result.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        HttpResponse { status, body }.error_for_status()
    }
}

impl Transport for UreqTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        let result = self.execute(request);
        async move { result }
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn font(font_kit: &str) -> FontIdentity {
    FontIdentity {
        family_path: None,
        family_name: "Noto Sans JP".to_string(),
        version: "100".to_string(),
        font_kit: font_kit.to_string(),
    }
}

#[tokio::test]
async fn backend_lifecycle() {
    let addr = start_server();
    let backend = BundleBackend::new(&format!("http://{addr}"), UreqTransport::new());

    // Step 1: glyphs, with a hyphen and characters that need percent-encoding.
    let codepoints = [0x3042, 45, 0x20, 0x26, 0x1F600];
    let bundle = backend.request_glyphs(&font("n1"), &codepoints).await.unwrap();
    let header = bundle.header();
    assert_eq!(header.version.to_string(), "1.0");
    assert_eq!(
        header.signature,
        "000102030405060708090a0b0c0d0e0fa0b1c2d3"
    );
    assert_eq!(header.glyph_count, 5);
    assert_eq!(header.flags, 0);
    assert_eq!(bundle.payload_offset(), 32);

    // The server echoes what it decoded: the hyphen first, the rest in order.
    let echoed: Vec<u32> = bundle
        .payload()
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(echoed, vec![45, 0x3042, 0x20, 0x26, 0x1F600]);

    // Step 2: font base comes back untouched.
    let base = backend.request_font_base(&font("n1")).await.unwrap();
    assert_eq!(base, b"framework:notosansjp/100/n1");

    // Step 3: a non-bundle response is a decode error.
    let err = backend.request_glyphs(&font("corrupt"), &[0x61]).await.unwrap_err();
    assert!(matches!(
        err,
        BackendError::Decode(DecodeError::InvalidMagicNumber { found }) if &found == b"<htm"
    ));

    // Step 4: HTTP failures surface as transport errors.
    let missing = FontIdentity {
        version: "1/extra".to_string(),
        ..font("n1")
    };
    let err = backend.request_font_base(&missing).await.unwrap_err();
    assert!(matches!(
        err,
        BackendError::Transport(TransportError::Status { status: 404, .. })
    ));

    // Step 5: log never reaches the server.
    assert!(backend.log("done").await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let backend = BundleBackend::new(&format!("http://{addr}"), UreqTransport::new());
    let err = backend.request_font_base(&font("n1")).await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(TransportError::Network(_))));
}
