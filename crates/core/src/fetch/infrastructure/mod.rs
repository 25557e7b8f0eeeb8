pub mod youtube_fetcher;
