use clipshelf_core::metadata::MetadataResolver;
use clipshelf_core::resolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string());

    match resolver::resolve(&url) {
        Some(detection) => {
            println!("platform: {}", detection.platform);
            println!("video id: {}", detection.video_id);
            println!("matched:  {}", detection.description);
        }
        None => {
            println!("unrecognized input: {}", url);
            return Ok(());
        }
    }

    let metadata = MetadataResolver::new()?.resolve(&url).await;
    println!("metadata: {}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
