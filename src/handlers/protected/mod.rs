// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: JWT Authentication Required
// Route Prefix: /remedios
// Middleware: jwt_auth_middleware, applied as a route layer in app.rs

pub mod remedios;
