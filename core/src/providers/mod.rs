/// Builtin embedding model providers
pub mod embeddings;
