//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the chain and being
//! passed to after, Ignore falling through to later handlers, and error propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dbot_core::{
    Chat, DbotError, Handler, HandlerResponse, InboundEvent, OutboundReply, User,
};
use handler_chain::HandlerChain;

fn create_test_event(text: &str) -> InboundEvent {
    InboundEvent::new(
        "test_message_id",
        User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: 456,
            chat_type: "private".to_string(),
            title: None,
        },
        Some(text.to_string()),
    )
}

fn reply(text: &str) -> OutboundReply {
    OutboundReply {
        chat_id: 456,
        text: text.to_string(),
    }
}

/// **Test: Empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());

    let result = chain.handle(&create_test_event("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: Handler before and after run; handle runs once.**
///
/// **Setup:** One handler (counts before/after), one handler (counts handle).
/// **Action:** `chain.handle(&event)`.
/// **Expected:** before_count=1, handle_count=1, after_count=1; response is Continue.
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler::new(
            before_count.clone(),
            after_count.clone(),
        )))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())));

    let result = chain.handle(&create_test_event("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(chain.len(), 2);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: Handler before returns false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _event: &InboundEvent) -> dbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())));

    let result = chain.handle(&create_test_event("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Handler returns Reply; chain stops and Reply is passed to after.**
///
/// **Setup:** A capturing handler, a Reply handler, then a counting handler that must not run.
/// **Expected:** result is the reply; the capturing handler saw it in after(); counter is 0.
#[tokio::test]
async fn test_handler_reply_stops_chain_and_passes_to_after() {
    struct ReplyHandler;

    #[async_trait::async_trait]
    impl Handler for ReplyHandler {
        async fn handle(&self, _event: &InboundEvent) -> dbot_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Reply(reply("pong")))
        }
    }

    struct CaptureResponseHandler {
        seen: Arc<std::sync::Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(
            &self,
            _event: &InboundEvent,
            response: &HandlerResponse,
        ) -> dbot_core::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let skipped_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(Arc::new(ReplyHandler))
        .add_handler(Arc::new(TestHandler::new(skipped_count.clone())));

    let result = chain.handle(&create_test_event("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply(reply("pong")));
    assert_eq!(
        *seen.lock().unwrap(),
        Some(HandlerResponse::Reply(reply("pong")))
    );
    assert_eq!(skipped_count.load(Ordering::SeqCst), 0);
}

/// **Test: Ignore falls through to the next handler.**
#[tokio::test]
async fn test_ignore_tries_next_handler() {
    struct IgnoreHandler;

    #[async_trait::async_trait]
    impl Handler for IgnoreHandler {
        async fn handle(&self, _event: &InboundEvent) -> dbot_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Ignore)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(IgnoreHandler))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())));

    let result = chain.handle(&create_test_event("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
}

/// **Test: A failing handler propagates its error.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _event: &InboundEvent) -> dbot_core::Result<HandlerResponse> {
            Err(DbotError::Handler("boom".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));

    let err = chain.handle(&create_test_event("test")).await.unwrap_err();

    assert!(matches!(err, DbotError::Handler(msg) if msg == "boom"));
}

/// **Test: Multiple handlers run before in order (first, second), after in reverse (second, first).**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    struct OrderHandler {
        name: String,
        order: Arc<std::sync::Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _event: &InboundEvent) -> dbot_core::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _event: &InboundEvent,
            _response: &HandlerResponse,
        ) -> dbot_core::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first".to_string(),
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second".to_string(),
            order: order.clone(),
        }));

    chain.handle(&create_test_event("test")).await.unwrap();

    let executed = order.lock().unwrap();
    assert_eq!(
        *executed,
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

// --- Helpers used by tests ---

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

impl TestBeforeAfterHandler {
    fn new(before_count: Arc<AtomicUsize>, after_count: Arc<AtomicUsize>) -> Self {
        Self {
            before_count,
            after_count,
        }
    }
}

#[async_trait::async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _event: &InboundEvent) -> dbot_core::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(&self, _event: &InboundEvent, _response: &HandlerResponse) -> dbot_core::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct TestHandler {
    handle_count: Arc<AtomicUsize>,
}

impl TestHandler {
    fn new(handle_count: Arc<AtomicUsize>) -> Self {
        Self { handle_count }
    }
}

#[async_trait::async_trait]
impl Handler for TestHandler {
    async fn handle(&self, _event: &InboundEvent) -> dbot_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Continue)
    }
}
