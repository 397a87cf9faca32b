//! # Shared Verifier Under Concurrency
//!
//! One verifier per process serving many callers: it must be `Send + Sync`
//! and give identical results from every thread.

#[cfg(test)]
mod tests {
    use crate::{json_verifier, RememberMeToken};
    use message_verifier::{JsonSerializer, MessageVerifier, MessageVerifierApi};
    use std::sync::Arc;
    use std::thread;

    const THREADS: u64 = 8;
    const TOKENS_PER_THREAD: u64 = 250;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_verifier_is_send_sync() {
        assert_send_sync::<MessageVerifier<JsonSerializer>>();
    }

    #[test]
    fn test_parallel_generate_and_verify() {
        let verifier = Arc::new(json_verifier());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let verifier = Arc::clone(&verifier);
                thread::spawn(move || {
                    for i in 0..TOKENS_PER_THREAD {
                        let token = RememberMeToken {
                            user_id: t * TOKENS_PER_THREAD + i,
                            email: format!("user{t}-{i}@example.com"),
                        };
                        let signed = verifier.generate(&token).unwrap();
                        let back: RememberMeToken = verifier.verify(&signed).unwrap();
                        assert_eq!(back, token);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }

    #[test]
    fn test_cross_thread_tokens_verify() {
        let verifier = json_verifier();

        // Tokens generated on worker threads verify on the main thread
        let signed: Vec<String> = thread::scope(|scope| {
            let workers: Vec<_> = (0..THREADS)
                .map(|t| {
                    let verifier = &verifier;
                    scope.spawn(move || verifier.generate(&format!("worker-{t}")).unwrap())
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        for (t, token) in signed.iter().enumerate() {
            let value: String = verifier.verify(token).unwrap();
            assert_eq!(value, format!("worker-{t}"));
        }
    }
}
