use ambefec_core::{FecDecoder, FecEncoder};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmFecCodec;

#[wasm_bindgen]
impl WasmFecCodec {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmFecCodec {
        WasmFecCodec
    }

    /// Encode a 7-byte parameter frame into a 9-byte FEC frame
    #[wasm_bindgen]
    pub fn encode(&self, params: &[u8]) -> Result<Vec<u8>, JsValue> {
        FecEncoder::encode_bytes(params)
            .map(|wire| wire.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode a 9-byte FEC frame into a 7-byte parameter frame
    #[wasm_bindgen]
    pub fn decode(&self, wire: &[u8]) -> Result<Vec<u8>, JsValue> {
        FecDecoder::decode_bytes(wire)
            .map(|params| params.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode back-to-back 9-byte FEC frames into back-to-back 7-byte parameter frames
    #[wasm_bindgen(js_name = decodeStream)]
    pub fn decode_stream(&self, wire: &[u8]) -> Result<Vec<u8>, JsValue> {
        FecDecoder::decode_stream(wire)
            .map(|frames| frames.iter().flat_map(|frame| *frame.as_bytes()).collect())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmFecCodec {
    fn default() -> Self {
        Self::new()
    }
}
