pub mod marker_server;
