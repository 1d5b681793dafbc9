//! Ctrl-C handling for long runs

use notes_sync::CancellationToken;

/// Cancel `token` on the first Ctrl-C; a second one exits with status 130.
///
/// The run stops at its next batch boundary or pause, so the batch in
/// flight finishes and the outcome is still reported.
pub fn cancel_on_interrupt(token: CancellationToken) {
    let spawned = std::thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!("Failed to start signal runtime: {}. Ctrl-C will abort.", e);
                    return;
                }
            };

            runtime.block_on(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("Failed to listen for Ctrl-C: {}", e);
                    return;
                }
                eprintln!("Interrupted; stopping after the current step (Ctrl-C again to abort)");
                token.cancel();

                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(130);
                }
            });
        });

    if let Err(e) = spawned {
        tracing::warn!("Failed to spawn Ctrl-C handler: {}", e);
    }
}
