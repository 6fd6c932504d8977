//! # Storage Layer
//!
//! The [`PostStore`] trait abstracts persistence of the post collection so
//! the application can work with different backends:
//!
//! - [`fs::FileStore`]: production storage, one JSON array in `posts.json`
//! - [`memory::InMemoryStore`]: no persistence, for fast isolated tests
//!
//! ## Storage contract
//!
//! The collection is only ever read and written as a whole: callers
//! `load_all`, mutate a copy, and `save_all` the result. There is no
//! partial-update API. [`PostStore::upsert`] and [`PostStore::remove`] are
//! helpers built on that read-modify-write cycle.
//!
//! A store that has never persisted a collection bootstraps itself on first
//! `load_all`: the fixed seed collection is written out immediately, so
//! every subsequent load returns the same data. An *empty* persisted
//! collection is a different state and is returned as-is.
//!
//! Within one process access is single-threaded and synchronous, so no
//! locking is needed. Two concurrent processes are not coordinated; the
//! last `save_all` wins.

use crate::error::Result;
use crate::model::Post;
use once_cell::sync::Lazy;

pub mod fs;
pub mod memory;

/// Abstract interface for post persistence.
pub trait PostStore {
    /// Returns the persisted collection, seeding the store first if no
    /// collection has ever been persisted.
    fn load_all(&mut self) -> Result<Vec<Post>>;

    /// Overwrites the persisted collection with `posts`.
    fn save_all(&mut self, posts: &[Post]) -> Result<()>;

    /// Replaces the post whose id matches, keeping its position; prepends
    /// when no post matches.
    fn upsert(&mut self, post: Post) -> Result<()> {
        let mut posts = self.load_all()?;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => *slot = post,
            None => posts.insert(0, post),
        }
        self.save_all(&posts)
    }

    /// Drops the post with the given id. A missing id leaves the
    /// collection unchanged and is not an error.
    fn remove(&mut self, id: i64) -> Result<()> {
        let mut posts = self.load_all()?;
        posts.retain(|p| p.id != id);
        self.save_all(&posts)
    }
}

static SEED: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            id: 1,
            date: "15 Mar, 2024".into(),
            category: "Certificações".into(),
            title: "Guia Definitivo para Certificação LEED v4.1".into(),
            excerpt: "Tudo o que você precisa saber sobre as novas exigências de performance \
                      e saúde para edifícios verdes."
                .into(),
            content: "A certificação LEED (Leadership in Energy and Environmental Design) é o \
                      selo de sustentabilidade mais reconhecido do mundo. Na versão 4.1, o foco \
                      mudou drasticamente para o desempenho em tempo real.\n\nNão basta apenas \
                      projetar uma economia; é necessário prová-la através de dados reais de \
                      consumo de energia e água.\n\nPrincipais mudanças:\n1. Créditos de \
                      Localização e Transporte: Maior ênfase em mobilidade elétrica.\n2. \
                      Eficiência Energética: Exigências 15% mais rígidas.\n3. Materiais: Foco em \
                      transparência química.\n\nNossa equipe técnica já está adaptada para \
                      garantir que seu próximo empreendimento alcance o nível Platinum com estas \
                      novas métricas."
                .into(),
            image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af9f23\
                        ?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                .into(),
            read_time: "8 min".into(),
        },
        Post {
            id: 2,
            date: "02 Abr, 2024".into(),
            category: "Inovação".into(),
            title: "BIM: A Digitalização do Canteiro de Obras".into(),
            excerpt: "A modelagem inteligente que reduz desperdício de materiais em até 30% na \
                      fase de execução."
                .into(),
            content: "O Building Information Modeling (BIM) não é apenas um software 3D; é um \
                      processo de gestão de informação. Ao construir virtualmente antes de \
                      colocar o primeiro tijolo no lugar, conseguimos prever colisões entre \
                      sistemas hidráulicos e estruturais, eliminando o retrabalho.\n\nBenefícios \
                      diretos:\n- Redução de custos em 15%.\n- Cumprimento de prazos com \
                      precisão de 95%.\n- Documentação as-built perfeita.\n\nNa CONSTRUÇÕES \
                      SUSTENTÁVEIS, todos os nossos projetos são desenvolvidos nativamente em \
                      BIM."
                .into(),
            image_url: "https://images.unsplash.com/photo-1503387762-592dea58ef21\
                        ?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                .into(),
            read_time: "5 min".into(),
        },
    ]
});

/// The collection a fresh store bootstraps itself with.
pub fn seed_posts() -> Vec<Post> {
    SEED.clone()
}
