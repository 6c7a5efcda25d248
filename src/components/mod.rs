mod admin_movies_page;
mod admin_users_page;
mod app;
mod confirm_dialog;
mod home_page;
mod login_screen;
mod movie_card;
mod movie_detail;
mod movie_form;
mod navbar;
mod pagination_controls;
mod search_page;
mod snackbar;
mod user_form;

pub use admin_movies_page::AdminMoviesPage;
pub use admin_users_page::AdminUsersPage;
pub use app::App;
pub use confirm_dialog::ConfirmDialog;
pub use home_page::HomePage;
pub use login_screen::LoginScreen;
pub use movie_card::MovieCard;
pub use movie_detail::MovieDetail;
pub use movie_form::MovieForm;
pub use navbar::Navbar;
pub use pagination_controls::PaginationControls;
pub use search_page::SearchPage;
pub use snackbar::{use_snackbar, SnackbarProvider};
pub use user_form::UserForm;
