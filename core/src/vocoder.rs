use crate::error::{AmbeError, Result};
use crate::fec::{FecDecoder, FecEncoder};
use crate::frame::{ParamFrame, WireFrame};
use crate::{PARAM_FRAME_BYTES, PCM_FRAME_SAMPLES, WIRE_FRAME_BYTES};
use log::{debug, warn};

/// Transcoder between parameter frames and 20 ms of 8 kHz audio.
///
/// Implementations that need the engine's own bit layout convert with the helpers in
/// [`crate::native`].
pub trait VocoderEngine {
    /// Prepare the engine for use. Called once by [`Vocoder::new`].
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn decode(&mut self, frame: &ParamFrame) -> Result<[i16; PCM_FRAME_SAMPLES]>;

    fn encode(&mut self, pcm: &[i16; PCM_FRAME_SAMPLES]) -> Result<ParamFrame>;
}

/// PCM <-> over-the-air frame transcoder: a vocoder engine behind the FEC layer.
pub struct Vocoder<E> {
    engine: E,
    closed: bool,
    last_error: Option<String>,
}

impl<E: VocoderEngine> Vocoder<E> {
    pub fn new(mut engine: E) -> Result<Self> {
        if let Err(e) = engine.init() {
            warn!("vocoder engine init failed: {}", e);
            return Err(AmbeError::InitFailed(cause(e)));
        }
        debug!("vocoder engine initialized");

        Ok(Self {
            engine,
            closed: false,
            last_error: None,
        })
    }

    /// Encode 160 PCM samples into a 9-byte FEC-protected frame.
    pub fn encode(&mut self, pcm: &[i16]) -> Result<[u8; WIRE_FRAME_BYTES]> {
        let result = self
            .encode_params(pcm)
            .map(|frame| FecEncoder::encode(&frame).into_bytes());
        self.track(result)
    }

    /// Decode a 9-byte FEC-protected frame into 160 PCM samples.
    pub fn decode(&mut self, ambe: &[u8]) -> Result<[i16; PCM_FRAME_SAMPLES]> {
        let result = self.decode_wire(ambe);
        self.track(result)
    }

    /// Encode 160 PCM samples into a bare 7-byte parameter frame.
    pub fn encode_raw(&mut self, pcm: &[i16]) -> Result<[u8; PARAM_FRAME_BYTES]> {
        let result = self.encode_params(pcm).map(ParamFrame::into_bytes);
        self.track(result)
    }

    /// Decode a bare 7-byte parameter frame into 160 PCM samples.
    pub fn decode_raw(&mut self, params: &[u8]) -> Result<[i16; PCM_FRAME_SAMPLES]> {
        let result = self.decode_params(params);
        self.track(result)
    }

    /// Stop accepting frames. Later calls fail with [`AmbeError::Closed`].
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            debug!("vocoder closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Message of the most recent failed call, cleared by any successful call.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(AmbeError::Closed);
        }
        Ok(())
    }

    fn encode_params(&mut self, pcm: &[i16]) -> Result<ParamFrame> {
        self.ensure_open()?;
        let pcm: &[i16; PCM_FRAME_SAMPLES] =
            pcm.try_into().map_err(|_| AmbeError::InvalidPcmSize {
                expected: PCM_FRAME_SAMPLES,
                got: pcm.len(),
            })?;

        self.engine.encode(pcm).map_err(|e| {
            warn!("vocoder engine encode failed: {}", e);
            AmbeError::EncodeFailed(cause(e))
        })
    }

    fn decode_wire(&mut self, ambe: &[u8]) -> Result<[i16; PCM_FRAME_SAMPLES]> {
        self.ensure_open()?;
        let wire = WireFrame::try_from(ambe)?;
        self.run_decode(&FecDecoder::decode(&wire))
    }

    fn decode_params(&mut self, params: &[u8]) -> Result<[i16; PCM_FRAME_SAMPLES]> {
        self.ensure_open()?;
        let frame = ParamFrame::try_from(params)?;
        self.run_decode(&frame)
    }

    fn run_decode(&mut self, frame: &ParamFrame) -> Result<[i16; PCM_FRAME_SAMPLES]> {
        self.engine.decode(frame).map_err(|e| {
            warn!("vocoder engine decode failed: {}", e);
            AmbeError::DecodeFailed(cause(e))
        })
    }

    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        result
    }
}

/// Engine errors already carry their own message; anything else is described in full.
fn cause(e: AmbeError) -> String {
    match e {
        AmbeError::Engine(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{from_native, pack_bits, to_native, unpack_bits};
    use crate::PARAM_FRAME_BITS;

    /// Carries parameter bits through "audio" one sample per bit, via the native layout.
    #[derive(Default)]
    struct LoopbackEngine {
        initialized: bool,
        frames: usize,
    }

    impl VocoderEngine for LoopbackEngine {
        fn init(&mut self) -> Result<()> {
            self.initialized = true;
            Ok(())
        }

        fn decode(&mut self, frame: &ParamFrame) -> Result<[i16; PCM_FRAME_SAMPLES]> {
            if !self.initialized {
                return Err(AmbeError::NotInitialized);
            }
            self.frames += 1;

            let mut pcm = [0i16; PCM_FRAME_SAMPLES];
            let bits = unpack_bits(&to_native(frame));
            pcm[..PARAM_FRAME_BITS].copy_from_slice(&bits);
            Ok(pcm)
        }

        fn encode(&mut self, pcm: &[i16; PCM_FRAME_SAMPLES]) -> Result<ParamFrame> {
            if !self.initialized {
                return Err(AmbeError::NotInitialized);
            }
            self.frames += 1;

            let mut bits = [0i16; PARAM_FRAME_BITS];
            bits.copy_from_slice(&pcm[..PARAM_FRAME_BITS]);
            Ok(from_native(&pack_bits(&bits)))
        }
    }

    struct BrokenEngine {
        fail_init: bool,
    }

    impl VocoderEngine for BrokenEngine {
        fn init(&mut self) -> Result<()> {
            if self.fail_init {
                return Err(AmbeError::Engine("firmware image missing".to_string()));
            }
            Ok(())
        }

        fn decode(&mut self, _frame: &ParamFrame) -> Result<[i16; PCM_FRAME_SAMPLES]> {
            Err(AmbeError::Engine("emulator halted".to_string()))
        }

        fn encode(&mut self, _pcm: &[i16; PCM_FRAME_SAMPLES]) -> Result<ParamFrame> {
            Err(AmbeError::Engine("emulator halted".to_string()))
        }
    }

    fn pcm_for(frame: &ParamFrame) -> Vec<i16> {
        let mut pcm = vec![0i16; PCM_FRAME_SAMPLES];
        pcm[..PARAM_FRAME_BITS].copy_from_slice(&unpack_bits(&to_native(frame)));
        pcm
    }

    #[test]
    fn test_encode_decode_through_fec() {
        let mut vocoder = Vocoder::new(LoopbackEngine::default()).unwrap();
        let frame = ParamFrame::from_fields(0x321, 0xFED, 0x1AB_CDEF);
        let pcm = pcm_for(&frame);

        let ambe = vocoder.encode(&pcm).unwrap();
        assert_eq!(ambe, FecEncoder::encode(&frame).into_bytes());

        let decoded = vocoder.decode(&ambe).unwrap();
        assert_eq!(&decoded[..], &pcm[..]);
        assert_eq!(vocoder.engine().frames, 2);
        assert!(vocoder.last_error().is_none());
    }

    #[test]
    fn test_raw_variants_skip_fec() {
        let mut vocoder = Vocoder::new(LoopbackEngine::default()).unwrap();
        let frame = ParamFrame::from_fields(0x001, 0x800, 1);
        let pcm = pcm_for(&frame);

        let params = vocoder.encode_raw(&pcm).unwrap();
        assert_eq!(&params, frame.as_bytes());
        assert_eq!(&vocoder.decode_raw(&params).unwrap()[..], &pcm[..]);
    }

    #[test]
    fn test_size_errors() {
        let mut vocoder = Vocoder::new(LoopbackEngine::default()).unwrap();

        match vocoder.encode(&[0i16; 80]) {
            Err(AmbeError::InvalidPcmSize { expected: 160, got: 80 }) => {}
            other => panic!("Expected InvalidPcmSize, got {:?}", other),
        }
        assert_eq!(
            vocoder.last_error(),
            Some("PCM frame must be 160 samples, got 80")
        );

        match vocoder.decode(&[0u8; 7]) {
            Err(AmbeError::InvalidFrameSize { expected: 9, got: 7 }) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }

        // Nothing reached the engine
        assert_eq!(vocoder.engine().frames, 0);

        // A good call clears the error
        vocoder.decode(&[0u8; 9]).unwrap();
        assert!(vocoder.last_error().is_none());
    }

    #[test]
    fn test_closed_vocoder() {
        let mut vocoder = Vocoder::new(LoopbackEngine::default()).unwrap();
        vocoder.close();
        vocoder.close();
        assert!(vocoder.is_closed());

        assert!(matches!(vocoder.encode(&[0i16; 160]), Err(AmbeError::Closed)));
        assert!(matches!(vocoder.decode(&[0u8; 9]), Err(AmbeError::Closed)));
        assert!(matches!(vocoder.decode_raw(&[0u8; 7]), Err(AmbeError::Closed)));
        assert_eq!(vocoder.last_error(), Some("Vocoder is closed"));
        assert_eq!(vocoder.into_engine().frames, 0);
    }

    #[test]
    fn test_init_failure() {
        match Vocoder::new(BrokenEngine { fail_init: true }) {
            Err(AmbeError::InitFailed(msg)) => assert_eq!(msg, "firmware image missing"),
            Err(other) => panic!("Expected InitFailed, got {:?}", other),
            Ok(_) => panic!("Expected InitFailed"),
        }
    }

    #[test]
    fn test_engine_failures_are_reported() {
        let mut vocoder = Vocoder::new(BrokenEngine { fail_init: false }).unwrap();

        match vocoder.encode(&[0i16; 160]) {
            Err(AmbeError::EncodeFailed(msg)) => assert_eq!(msg, "emulator halted"),
            other => panic!("Expected EncodeFailed, got {:?}", other),
        }
        assert_eq!(vocoder.last_error(), Some("Encoding failed: emulator halted"));

        match vocoder.decode(&[0u8; 9]) {
            Err(AmbeError::DecodeFailed(msg)) => assert_eq!(msg, "emulator halted"),
            other => panic!("Expected DecodeFailed, got {:?}", other),
        }
        assert_eq!(vocoder.last_error(), Some("Decoding failed: emulator halted"));
    }
}
