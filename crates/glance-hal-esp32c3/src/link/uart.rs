//! Async companion receive loop.

use embedded_io_async::Read;
use log::{debug, warn};

use super::{CompanionHandle, FrameParser, decode_frame};

const RX_BUF_BYTES: usize = 64;

/// Reads companion bytes, deframes them, and queues decoded messages on
/// the shared handle. Malformed frames resynchronize and are dropped.
pub async fn companion_rx_loop<R>(mut rx: R, handle: &'static CompanionHandle) -> !
where
    R: Read,
{
    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_BYTES];

    loop {
        match rx.read(&mut buf).await {
            Ok(0) => {}
            Ok(n) => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match decode_frame(frame) {
                            Some(inbound) => handle.push(inbound),
                            None => debug!("companion: malformed payload dropped"),
                        },
                        Ok(None) => {}
                        Err(err) => warn!("companion: frame error {:?}", err),
                    }
                }
            }
            Err(err) => warn!("companion: uart read error {:?}", err),
        }
    }
}
