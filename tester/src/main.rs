use clap::Parser;
use reqwest::Client;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of a running storyfun server.
    #[arg(default_value = "http://127.0.0.1:5000")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new();

    let body = client
        .post(format!("{}/stories", args.base_url))
        .form(&[("story", "Once upon a time, the tester uploaded a story.")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let filename = body
        .split("filename=")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("upload response should link the new story");

    println!("Uploaded: {}", filename);

    let story = client
        .get(format!("{}/stories/view", args.base_url))
        .query(&[("filename", filename)])
        .send()
        .await
        .unwrap();

    println!("View status: {}", story.status());
    println!("View bytes: {}", story.text().await.unwrap().len());

    let random = client
        .get(format!("{}/random_story", args.base_url))
        .send()
        .await
        .unwrap();

    println!("Random story status: {}", random.status());
}
