/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Transport abstraction and its reqwest implementation
pub mod http;
/// Identity host selection by jurisdiction
pub mod locale;
/// Request model handed to the transport
pub mod requests;
/// Response model returned by the transport
pub mod responses;
