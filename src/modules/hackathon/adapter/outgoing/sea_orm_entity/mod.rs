pub mod hackathon_posts;
