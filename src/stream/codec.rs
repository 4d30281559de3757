//! Binary frame encoding for the external control (v1) UDP protocol.
//!
//! Layout of one datagram, every field a single byte:
//!
//! ```text
//! panelCount
//! repeat panelCount:
//!     panelId frameCount
//!     repeat frameCount:
//!         red green blue 0 transition
//! ```

use std::fmt::Write;

use crate::errors::Error;
use crate::types::StreamEffect;

type Result<T> = std::result::Result<T, Error>;

const FRAME_LEN: usize = 5;
const RESERVED: u8 = 0;

/// Number of bytes [`encode`] produces for `effect`.
pub fn encoded_len(effect: &StreamEffect) -> usize {
    1 + effect
        .panels
        .iter()
        .map(|panel| 2 + panel.frames.len() * FRAME_LEN)
        .sum::<usize>()
}

/// Serialize `effect` into one streaming datagram.
///
/// The only failure is a count that does not fit its byte: more than 255
/// panels, or more than 255 frames on one panel. An effect with no panels
/// encodes to the single byte `0x00`.
///
/// # Examples
///
/// ```
/// use nanoleaf_rs::{Frame, PanelEffect, StreamEffect, stream};
///
/// let effect = StreamEffect::new().panel(PanelEffect::new(5).frame(Frame::new(10, 20, 30, 4)));
/// let bytes = stream::encode(&effect).unwrap();
/// assert_eq!(bytes, [0x01, 0x05, 0x01, 0x0A, 0x14, 0x1E, 0x00, 0x04]);
/// ```
pub fn encode(effect: &StreamEffect) -> Result<Vec<u8>> {
    let panel_count =
        u8::try_from(effect.panels.len()).map_err(|_| Error::TooManyPanels(effect.panels.len()))?;

    let mut buf = Vec::with_capacity(encoded_len(effect));
    buf.push(panel_count);

    for panel in &effect.panels {
        let frame_count = u8::try_from(panel.frames.len()).map_err(|_| Error::TooManyFrames {
            panel_id: panel.id,
            count: panel.frames.len(),
        })?;
        buf.extend_from_slice(&[panel.id, frame_count]);

        for frame in &panel.frames {
            buf.extend_from_slice(&[frame.red, frame.green, frame.blue, RESERVED, frame.transition]);
        }
    }

    Ok(buf)
}

/// Render `effect` as the space separated `animData` string used by custom
/// effects, with the same field order as the binary form.
///
/// ```
/// use nanoleaf_rs::{Frame, PanelEffect, StreamEffect, stream};
///
/// let effect = StreamEffect::new().panel(PanelEffect::new(5).frame(Frame::new(10, 20, 30, 4)));
/// assert_eq!(stream::encode_anim_data(&effect), "1 5 1 10 20 30 0 4");
/// ```
pub fn encode_anim_data(effect: &StreamEffect) -> String {
    let mut data = effect.panels.len().to_string();
    for panel in &effect.panels {
        let _ = write!(data, " {} {}", panel.id, panel.frames.len());
        for frame in &panel.frames {
            let _ = write!(
                data,
                " {} {} {} {} {}",
                frame.red, frame.green, frame.blue, RESERVED, frame.transition
            );
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Frame, PanelEffect};
    use proptest::prelude::*;

    /// Inverse of `encode`, checking the reserved byte along the way.
    fn decode(bytes: &[u8]) -> StreamEffect {
        let mut it = bytes.iter().copied();
        let mut next = || it.next().expect("truncated datagram");
        let mut effect = StreamEffect::new();
        for _ in 0..next() {
            let mut panel = PanelEffect::new(next());
            for _ in 0..next() {
                let (red, green, blue) = (next(), next(), next());
                assert_eq!(next(), 0, "reserved byte must be zero");
                panel.frames.push(Frame::new(red, green, blue, next()));
            }
            effect.panels.push(panel);
        }
        effect
    }

    fn sample() -> StreamEffect {
        StreamEffect::new()
            .panel(
                PanelEffect::new(0)
                    .frame(Frame::new(255, 0, 0, 1))
                    .frame(Frame::new(0, 255, 0, 10))
                    .frame(Frame::new(0, 0, 255, 255)),
            )
            .panel(PanelEffect::new(255))
            .panel(PanelEffect::new(0).frame(Frame::new(1, 2, 3, 0)))
    }

    #[test]
    fn test_empty_effect_is_single_zero() {
        assert_eq!(encode(&StreamEffect::new()).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_known_bytes() {
        let effect = StreamEffect::new().panel(PanelEffect::new(5).frame(Frame::new(10, 20, 30, 4)));
        assert_eq!(
            encode(&effect).unwrap(),
            vec![0x01, 0x05, 0x01, 0x0A, 0x14, 0x1E, 0x00, 0x04]
        );
    }

    #[test]
    fn test_decode_recovers_effect() {
        let effect = sample();
        let bytes = encode(&effect).unwrap();
        assert_eq!(bytes.len(), encoded_len(&effect));
        assert_eq!(decode(&bytes), effect);
    }

    #[test]
    fn test_frameless_panel_still_counted() {
        let effect = StreamEffect::new().panel(PanelEffect::new(42));
        assert_eq!(encode(&effect).unwrap(), vec![1, 42, 0]);
    }

    #[test]
    fn test_max_counts_accepted() {
        let mut panel = PanelEffect::new(1);
        panel.frames = vec![Frame::new(1, 1, 1, 1); 255];
        let effect = StreamEffect {
            panels: vec![panel; 255],
        };
        let bytes = encode(&effect).unwrap();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes[2], 255);
        assert_eq!(bytes.len(), 1 + 255 * (2 + 255 * 5));
    }

    #[test]
    fn test_too_many_panels_rejected() {
        let effect = StreamEffect {
            panels: vec![PanelEffect::new(1); 256],
        };
        assert_eq!(encode(&effect), Err(Error::TooManyPanels(256)));
    }

    #[test]
    fn test_too_many_frames_rejected() {
        let mut panel = PanelEffect::new(9);
        panel.frames = vec![Frame::default(); 256];
        let effect = StreamEffect::new().panel(panel);
        assert_eq!(
            encode(&effect),
            Err(Error::TooManyFrames {
                panel_id: 9,
                count: 256
            })
        );
    }

    #[test]
    fn test_anim_data_matches_binary_order() {
        let effect = sample();
        let text: Vec<u8> = encode_anim_data(&effect)
            .split(' ')
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(text, encode(&effect).unwrap());
    }

    fn arb_frame() -> impl Strategy<Value = Frame> {
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(red, green, blue, transition)| Frame::new(red, green, blue, transition))
    }

    fn arb_effect() -> impl Strategy<Value = StreamEffect> {
        let panel = (any::<u8>(), prop::collection::vec(arb_frame(), 0..=255))
            .prop_map(|(id, frames)| PanelEffect { id, frames });
        prop::collection::vec(panel, 0..=255).prop_map(|panels| StreamEffect { panels })
    }

    /// Offsets of every reserved byte in the encoding of `effect`.
    fn reserved_offsets(effect: &StreamEffect) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut at = 1;
        for panel in &effect.panels {
            at += 2;
            for _ in &panel.frames {
                offsets.push(at + 3);
                at += FRAME_LEN;
            }
        }
        offsets
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn test_encode_decode_any_effect(effect in arb_effect()) {
            let bytes = encode(&effect).unwrap();
            prop_assert_eq!(bytes.len(), encoded_len(&effect));
            prop_assert_eq!(bytes[0] as usize, effect.panels.len());
            for at in reserved_offsets(&effect) {
                prop_assert_eq!(bytes[at], RESERVED);
            }
            prop_assert_eq!(decode(&bytes), effect);
        }

        #[test]
        fn test_anim_data_fields_follow_datagram(effect in arb_effect()) {
            let fields: Vec<u8> = encode_anim_data(&effect)
                .split(' ')
                .map(|n| n.parse().unwrap())
                .collect();
            prop_assert_eq!(fields, encode(&effect).unwrap());
        }
    }
}
