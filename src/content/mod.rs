//! # Conteúdo Embutido
//!
//! Textos didáticos compilados no binário. Nenhum destes dados muda em tempo
//! de execução; os tipos em [`crate::core`] e [`crate::pharmacology`] são
//! montados a partir destas tabelas na inicialização.
//!
//! | Módulo | Conteúdo |
//! |--------|----------|
//! | [`topics`] | Tópicos da base de conhecimento (46 entradas) |
//! | [`lexicon`] | Sinônimos e palavras-gatilho por área |
//! | [`guides`] | Comparações, guias de medicamentos, mecanismos e menu |
//! | [`formulary`] | Monografias farmacológicas e nomes comerciais |

pub mod formulary;
pub mod guides;
pub mod lexicon;
pub mod topics;
