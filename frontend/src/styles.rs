pub const CONTAINER: &str = "min-h-screen w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-xl mx-auto px-4 sm:px-6 py-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/70 dark:bg-gray-900/70 backdrop-blur-md border-b border-rose-100/60 dark:border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-rose-500 transition-colors duration-200";
pub const NAV_ITEMS: &str = "items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-rose-500 dark:hover:text-rose-400 transition-colors duration-200";
pub const CARD: &str = "bg-white/90 dark:bg-gray-800/90 rounded-2xl shadow-lg border border-rose-100/70 dark:border-gray-700/60 p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-5 py-2.5 rounded-full font-semibold text-white bg-gradient-to-r from-rose-500 to-fuchsia-500 hover:from-rose-600 hover:to-fuchsia-600 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-5 py-2.5 rounded-full font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-rose-500";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const CHIP: &str = "px-4 py-2 rounded-full border text-sm font-medium transition-all duration-200";
pub const CHIP_ON: &str = "bg-rose-500 border-rose-500 text-white shadow";
pub const CHIP_OFF: &str = "bg-white dark:bg-gray-900 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:border-rose-400";
pub const BADGE: &str = "inline-flex items-center px-3 py-1 rounded-full text-xs font-semibold bg-rose-100 text-rose-700 dark:bg-rose-900/40 dark:text-rose-300";

// Hero section
pub const HERO_CONTAINER: &str = "relative flex items-center justify-center";
pub const HERO_CONTENT: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center";
pub const HERO_TITLE: &str = "text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-rose-400 to-fuchsia-500 mb-6";
