pub mod request_download;
