use heapless::Vec;

/// Start-of-frame marker.
pub const SYNC: u8 = 0xC5;
/// Largest payload on the wire is the 48x48 icon plus headroom.
pub const MAX_PAYLOAD: usize = 384;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum FrameType {
    Connection = 0x01,
    Notification = 0x02,
    Time = 0x03,
    Battery = 0x04,
    NavData = 0x05,
    NavIcon = 0x06,
}

impl FrameType {
    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x01 => Some(Self::Connection),
            0x02 => Some(Self::Notification),
            0x03 => Some(Self::Time),
            0x04 => Some(Self::Battery),
            0x05 => Some(Self::NavData),
            0x06 => Some(Self::NavIcon),
            _ => None,
        }
    }
}

/// One deframed companion message.
#[derive(Debug)]
pub struct Frame<'a> {
    pub frame_type: FrameType,
    pub payload: &'a [u8],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameError {
    UnknownType(u8),
    Oversize(u16),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseState {
    Sync,
    Type,
    LenLo,
    LenHi,
    Payload,
}

/// Byte-at-a-time deframer: sync byte, type, little-endian u16 length,
/// payload. Errors resynchronize on the next sync byte.
pub struct FrameParser {
    state: ParseState,
    frame_type: FrameType,
    expected: usize,
    payload: Vec<u8, MAX_PAYLOAD>,
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::Sync,
            frame_type: FrameType::Connection,
            expected: 0,
            payload: Vec::new(),
        }
    }

    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame<'_>>, FrameError> {
        match self.state {
            ParseState::Sync => {
                if byte == SYNC {
                    self.state = ParseState::Type;
                }
                Ok(None)
            }
            ParseState::Type => match FrameType::from_raw(byte) {
                Some(frame_type) => {
                    self.frame_type = frame_type;
                    self.state = ParseState::LenLo;
                    Ok(None)
                }
                None => {
                    self.state = ParseState::Sync;
                    Err(FrameError::UnknownType(byte))
                }
            },
            ParseState::LenLo => {
                self.expected = byte as usize;
                self.state = ParseState::LenHi;
                Ok(None)
            }
            ParseState::LenHi => {
                self.expected |= (byte as usize) << 8;
                if self.expected > MAX_PAYLOAD {
                    let oversize = self.expected as u16;
                    self.state = ParseState::Sync;
                    return Err(FrameError::Oversize(oversize));
                }

                self.payload.clear();
                if self.expected == 0 {
                    self.state = ParseState::Sync;
                    return Ok(Some(Frame {
                        frame_type: self.frame_type,
                        payload: &self.payload,
                    }));
                }

                self.state = ParseState::Payload;
                Ok(None)
            }
            ParseState::Payload => {
                // Length was bounds-checked, push cannot fail.
                let _ = self.payload.push(byte);
                if self.payload.len() == self.expected {
                    self.state = ParseState::Sync;
                    return Ok(Some(Frame {
                        frame_type: self.frame_type,
                        payload: &self.payload,
                    }));
                }
                Ok(None)
            }
        }
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}
