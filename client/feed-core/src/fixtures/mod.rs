//! Compiled-in sample data standing in for a real backend.
//!
//! The content (usernames, captions, comments, saved lists) is the demo app's
//! shipped data set; the feed store seeds itself from here on load.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::{Comment, MediaKind, Post, PostContent, User};

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user("1", "memezada", 1),
        user("2", "humorBR", 2),
        user("3", "risadasInfinitas", 3),
        user("4", "tioDoPave", 4),
        user("5", "memeQueen", 5),
    ]
});

fn user(id: &str, username: &str, avatar: u8) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?img={}", avatar),
    }
}

fn ts(value: &str) -> DateTime<Utc> {
    value
        .parse()
        .expect("fixture timestamps are valid RFC 3339")
}

fn comment(id: &str, author: &User, text: &str, at: &str, like_count: u32) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.clone(),
        text: text.to_string(),
        created_at: ts(at),
        like_count,
        attachment: None,
    }
}

fn image_post(
    id: &str,
    author: &User,
    image: &str,
    alt: &str,
    caption: &str,
    at: &str,
    like_count: u32,
    comments: Vec<Comment>,
    tags: &[&str],
) -> Post {
    Post {
        id: id.to_string(),
        author: author.clone(),
        content: PostContent {
            kind: MediaKind::Image,
            data: image.to_string(),
            alt_text: Some(alt.to_string()),
        },
        caption: Some(caption.to_string()),
        created_at: ts(at),
        like_count,
        comments,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// The mock accounts posts and comments are attributed to.
pub fn seed_users() -> Vec<User> {
    SEED_USERS.clone()
}

/// The fixed identity every session is "signed in" as.
pub fn current_user() -> User {
    SEED_USERS[0].clone()
}

/// The demo feed: seven posts, most recent first.
pub fn seed_posts() -> Vec<Post> {
    let users = &*SEED_USERS;
    vec![
        image_post(
            "1",
            &users[0],
            "https://picsum.photos/id/237/600/800",
            "Cachorro preto olhando para a câmera",
            "Quando minha mãe pergunta se eu já estudei hoje",
            "2025-07-09T18:25:43.511Z",
            3452,
            vec![
                comment(
                    "c1",
                    &users[1],
                    "Nossa, muito eu! 😂",
                    "2025-07-09T18:30:43.511Z",
                    124,
                ),
                comment(
                    "c2",
                    &users[2],
                    "Minha cara todo dia!",
                    "2025-07-09T18:35:43.511Z",
                    89,
                ),
            ],
            &["meme", "cachorro", "estudos"],
        ),
        image_post(
            "2",
            &users[1],
            "https://picsum.photos/id/1/600/800",
            "Pessoa na montanha observando o horizonte",
            "Eu após 5 minutos de academia já planejando minha nova vida fitness",
            "2025-07-09T17:15:43.511Z",
            5231,
            vec![comment(
                "c3",
                &users[3],
                "E no dia seguinte nunca mais volta 🤣",
                "2025-07-09T17:25:43.511Z",
                231,
            )],
            &["meme", "academia", "fitness"],
        ),
        image_post(
            "3",
            &users[2],
            "https://picsum.photos/id/20/600/800",
            "Prateleiras com muitos livros",
            "Minha lista de livros para ler nas férias vs. o que realmente leio",
            "2025-07-09T16:10:43.511Z",
            2187,
            vec![
                comment(
                    "c4",
                    &users[4],
                    "Literalmente minha vida 📚",
                    "2025-07-09T16:15:43.511Z",
                    134,
                ),
                comment(
                    "c5",
                    &users[0],
                    "Quem nunca né? Começo 10 e não termino nenhum",
                    "2025-07-09T16:20:43.511Z",
                    98,
                ),
            ],
            &["livros", "ferias", "realidade"],
        ),
        image_post(
            "4",
            &users[3],
            "https://picsum.photos/id/42/600/800",
            "Pessoa usando computador",
            "Programador em reunião tentando explicar por que a tarefa vai demorar mais do que o estimado",
            "2025-07-09T15:05:43.511Z",
            4720,
            vec![comment(
                "c6",
                &users[1],
                "Como programador, confirmo que é assim mesmo 💻",
                "2025-07-09T15:10:43.511Z",
                245,
            )],
            &["programador", "trabalho", "ti"],
        ),
        image_post(
            "5",
            &users[4],
            "https://picsum.photos/id/96/600/800",
            "Paisagem de praia",
            "Eu esperando o fim de semana chegar vs. O fim de semana passando",
            "2025-07-09T14:00:43.511Z",
            6853,
            vec![
                comment(
                    "c7",
                    &users[2],
                    "Final de semana passa em 5 minutos, é impressionante",
                    "2025-07-09T14:05:43.511Z",
                    321,
                ),
                comment(
                    "c8",
                    &users[0],
                    "Segunda-feira já está me encarando 😭",
                    "2025-07-09T14:10:43.511Z",
                    178,
                ),
            ],
            &["fimdesemana", "tempo", "segunda"],
        ),
        image_post(
            "6",
            &users[0],
            "https://picsum.photos/id/116/600/800",
            "Montanhas com neblina",
            "Meu humor na segunda-feira de manhã",
            "2025-07-09T13:30:43.511Z",
            3127,
            vec![comment(
                "c9",
                &users[3],
                "Nem me fale, odeio segundas 😩",
                "2025-07-09T13:35:43.511Z",
                145,
            )],
            &["segunda", "trabalho", "humor"],
        ),
        image_post(
            "7",
            &users[2],
            "https://picsum.photos/id/169/600/800",
            "Laptop em uma mesa",
            "Quando você tem 10 tarefas para fazer e decide tirar uma soneca",
            "2025-07-09T12:15:43.511Z",
            5421,
            vec![
                comment(
                    "c10",
                    &users[1],
                    "Prioridades, gente! 😴",
                    "2025-07-09T12:20:43.511Z",
                    267,
                ),
                comment(
                    "c11",
                    &users[4],
                    "A procrastinação é minha especialidade",
                    "2025-07-09T12:25:43.511Z",
                    198,
                ),
            ],
            &["procrastinacao", "soneca", "tarefas"],
        ),
    ]
}

/// A saved meme the user can share into a comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPost {
    pub id: String,
    pub image: String,
}

/// A named collection of saved memes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedList {
    pub id: String,
    pub name: String,
    pub posts: Vec<SavedPost>,
}

fn saved_post(id: &str, image_id: u32) -> SavedPost {
    SavedPost {
        id: id.to_string(),
        image: format!("https://picsum.photos/id/{}/300/300", image_id),
    }
}

/// The current user's saved lists, as shown in the comment composer.
pub fn saved_lists() -> Vec<SavedList> {
    vec![
        SavedList {
            id: "l1".to_string(),
            name: "Memes Favoritos".to_string(),
            posts: vec![
                saved_post("p1", 237),
                saved_post("p2", 238),
                saved_post("p3", 239),
            ],
        },
        SavedList {
            id: "l2".to_string(),
            name: "Para Compartilhar".to_string(),
            posts: vec![saved_post("p4", 240), saved_post("p5", 241)],
        },
        SavedList {
            id: "l3".to_string(),
            name: "Inspiração".to_string(),
            posts: vec![
                saved_post("p6", 242),
                saved_post("p7", 243),
                saved_post("p8", 244),
            ],
        },
    ]
}
