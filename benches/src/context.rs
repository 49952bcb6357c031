use rand::Rng;

#[derive(serde::Serialize)]
pub struct Context {
    pub blog: Blog,
}

#[derive(serde::Serialize)]
pub struct Blog {
    pub id: String,
    pub name: String,
    pub user_name: String,
    pub summary: String,
    pub html_content: String,
    pub tags: Vec<String>,
    pub created_at: f64,
}

pub fn random(content_len: usize) -> Context {
    let mut rng = rand::thread_rng();
    let mut word = |n: usize| -> String { (0..n).map(|_| rng.gen_range('a'..='z')).collect() };
    let blog = Blog {
        id: word(32),
        name: word(20),
        user_name: word(10),
        summary: format!("  {} <{}> & {}  ", word(30), word(5), word(30)),
        html_content: format!("<p>{}</p>", word(content_len)),
        tags: (0..5).map(|_| word(6)).collect(),
        created_at: 1_709_629_622.0,
    };
    Context { blog }
}
