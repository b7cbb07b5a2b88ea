use clap::Parser;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 << 20;

#[derive(Parser, Debug)]
#[command(about = "Stores, lists and serves named images from one directory")]
pub struct Args {
    #[clap(long, env = "BLOB_HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: String,
    #[clap(long, env = "BLOB_DATA_DIR", default_value = "./images")]
    pub data_dir: String,
    /// Shared secret every request must carry in the `API-Key` header.
    #[clap(long, env = "BLOB_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[clap(long, env = "BLOB_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}
