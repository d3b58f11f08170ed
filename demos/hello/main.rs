use tracing_subscriber::EnvFilter;
use yating_tts::{SynthesisParams, TtsClient, DEFAULT_ENDPOINT};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("YATING_TTS_KEY")?;
    let endpoint = std::env::var("YATING_TTS_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());

    let params = SynthesisParams::new("晚上好，歡迎進入直播間。")
        .voice_model("zh_en_female_2")
        .encoding("MP3")
        .sample_rate("22K");
    let path = TtsClient::new(endpoint, api_key).synthesize(&params, "hello")?;
    println!("{}", path.display());
    Ok(())
}
