pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `update_drawn_node`/`insert_drawn_node` was called while no node is staged.
    #[error("no node has been drawn")]
    NoDrawnNode,

    /// The layout engine rejected a description or could not be run at all.
    #[error("layout engine failed: {message}")]
    Layout { message: String },

    /// The layout engine returned output the staging layer cannot use.
    #[error("layout engine produced unusable output: {message}")]
    MalformedOutput { message: String },

    #[error(transparent)]
    InvalidSvg(#[from] grampus_svg::ParseError),
}
