mod request_download;

pub use request_download::{
    __path_request_download_handler, request_download_handler, RequestDownloadRequest,
};
