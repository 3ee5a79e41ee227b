use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug)]
pub enum Error {
    NoMessage,
    NoPdfName,
    NoText,
    NoTopic,
    NoTitle,
    NoChatId,
    NoQuizId,
    NoQuestions,
    NotPdf,
    /// The request body is not the JSON we expected.
    InvalidParams,
    ExtractFailed,
    GenerateFailed,
    UnknownQuiz,
    UnknownChat,
    UnknownPdf,
    AlreadySubmitted,
    NotFound,
    MethodNotAllowed,
    /// Persisting the state failed.
    Storage(db::error::Error),
}

impl Error {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NoMessage
            | Self::NoPdfName
            | Self::NoText
            | Self::NoTopic
            | Self::NoTitle
            | Self::NoChatId
            | Self::NoQuizId
            | Self::NoQuestions
            | Self::NotPdf
            | Self::InvalidParams => StatusCode::BAD_REQUEST,
            Self::UnknownQuiz | Self::UnknownChat | Self::UnknownPdf | Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadySubmitted => StatusCode::CONFLICT,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::ExtractFailed | Self::GenerateFailed | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<db::error::Error> for Error {
    fn from(err: db::error::Error) -> Self {
        Self::Storage(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoMessage => "No message provided",
            Self::NoPdfName => "No PDF name provided",
            Self::NoText => "No text provided",
            Self::NoTopic => "No topic provided",
            Self::NoTitle => "No title provided",
            Self::NoChatId => "No chat ID provided",
            Self::NoQuizId => "No quiz ID provided",
            Self::NoQuestions => "No questions to submit",
            Self::NotPdf => "Please upload only PDF files",
            Self::InvalidParams => "Malformed request body",
            Self::ExtractFailed => "Failed to extract text from PDF",
            Self::GenerateFailed => "Failed to generate questions",
            Self::UnknownQuiz => "Quiz not found",
            Self::UnknownChat => "Chat not found",
            Self::UnknownPdf => "PDF not found",
            Self::AlreadySubmitted => "Quiz already submitted",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Storage(_) => "Failed to save your data",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
