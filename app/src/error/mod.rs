use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the voting operations. `Display` is the message shown to the
/// user; database details are logged by the caller and never displayed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Competencia no encontrada")]
    CompetitionNotFound,
    #[error("Candidato no encontrado")]
    CandidateNotFound,
    #[error("Ya has votado en esta competencia")]
    AlreadyVoted,
    #[error("Candidatos no especificados")]
    MissingCandidates,
    #[error("Debes seleccionar exactamente 3 candidatos")]
    WrongCandidateCount,
    #[error("Candidato inválido")]
    InvalidCandidate,
    #[error("No puedes repetir candidatos")]
    DuplicateCandidate,
    #[error("Nombre de candidato inválido")]
    InvalidName,
    #[error("Error interno del servidor")]
    Database(#[from] DbErr),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CompetitionNotFound | Self::CandidateNotFound)
    }
}
