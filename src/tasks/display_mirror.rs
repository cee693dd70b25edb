//! Terminal mirror of the display element

use tokio::io::{self, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::display::DisplayElement;

/// Background task that prints the display to stdout whenever it changes
pub async fn display_mirror_task(display: DisplayElement) {
    mirror(display, io::stdout()).await;
}

/// Write `\rMM:SS` to `out` for the current text and every change after it
pub async fn mirror<W: AsyncWrite + Unpin>(display: DisplayElement, mut out: W) {
    debug!("Starting display mirror task");

    let mut rx = display.subscribe();
    loop {
        let text = rx.borrow_and_update().clone();
        if let Err(e) = write_frame(&mut out, &text).await {
            warn!("Failed to write display to terminal: {}", e);
            return;
        }

        if rx.changed().await.is_err() {
            debug!("Display element dropped, stopping mirror");
            return;
        }
    }
}

async fn write_frame<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(format!("\r{}", text).as_bytes()).await?;
    out.flush().await
}
