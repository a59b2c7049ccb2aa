use std::{
    net::{SocketAddr, ToSocketAddrs, UdpSocket},
    sync::{Arc, Mutex, PoisonError},
};

/// Where encoded wire strings go. Calls are blocking and in order; a failure
/// is returned to whoever sent the message.
pub trait Transport {
    fn send(&mut self, wire: &str) -> Result<(), TransportError>;
}

#[derive(Debug)]
pub enum TransportError {
    Io(std::io::Error),
    /// Bounded queue had no room
    Full,
    /// Receiving side is gone
    Closed,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Io(err) => write!(f, "I/O error: {}", err),
            TransportError::Full => f.write_str("transport queue is full"),
            TransportError::Closed => f.write_str("transport is closed"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, wire: &str) -> Result<(), TransportError> {
        (**self).send(wire)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn send(&mut self, _wire: &str) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Keeps every wire string in memory. Clones share one buffer, so keep a
/// clone to inspect what a [`Context`](super::Context) sent.
#[derive(Debug, Default, Clone)]
pub struct CaptureTransport {
    sent: Arc<Mutex<Vec<String>>>,
}

impl CaptureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far.
    pub fn sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.sent.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Transport for CaptureTransport {
    fn send(&mut self, wire: &str) -> Result<(), TransportError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(wire.to_string());
        Ok(())
    }
}

/// One datagram per wire string.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpTransport {
    pub fn connect(target: impl ToSocketAddrs) -> Result<Self, TransportError> {
        let target = target.to_socket_addrs()?.next().ok_or_else(|| {
            TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no address to send to",
            ))
        })?;
        let bind: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(bind)?;
        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, wire: &str) -> Result<(), TransportError> {
        self.socket.send_to(wire.as_bytes(), self.target)?;
        Ok(())
    }
}

#[cfg(feature = "rtrb")]
impl Transport for rtrb::Producer<String> {
    fn send(&mut self, wire: &str) -> Result<(), TransportError> {
        if self.is_abandoned() {
            return Err(TransportError::Closed);
        }
        self.push(wire.to_string()).map_err(|_| TransportError::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_clones_share_buffer() {
        let capture = CaptureTransport::new();
        let mut sender = capture.clone();
        sender.send("v0n60Z").unwrap();
        sender.send("v0l0Z").unwrap();
        assert_eq!(capture.sent(), vec!["v0n60Z", "v0l0Z"]);
        assert_eq!(capture.take().len(), 2);
        assert!(capture.sent().is_empty());
    }

    #[test]
    fn udp_delivers_datagram() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut transport = UdpTransport::connect(receiver.local_addr().unwrap()).unwrap();
        transport.send("v0w1Z").unwrap();
        let mut buf = [0u8; 64];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"v0w1Z");
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn ring_buffer_reports_full() {
        let (mut tx, mut rx) = rtrb::RingBuffer::<String>::new(1);
        tx.send("a").unwrap();
        assert!(matches!(tx.send("b"), Err(TransportError::Full)));
        assert_eq!(rx.pop().unwrap(), "a");
    }
}
