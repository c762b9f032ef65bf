pub const APP_CONTAINER: &str = "min-h-screen w-full max-w-md mx-auto bg-slate-900 text-white";
pub const HEADER: &str = "px-4 pt-4 pb-2 flex items-center justify-between";
pub const HEADER_TITLE: &str = "text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const STATS_ROW: &str = "flex items-center space-x-2";
pub const STAT_CARD: &str = "flex flex-col items-center px-3 py-1 rounded-lg bg-slate-800 border border-slate-700";
pub const STAT_LABEL: &str = "text-[10px] uppercase tracking-wide text-slate-400";
pub const STAT_VALUE: &str = "text-sm font-bold text-white";
pub const STAT_VALUE_HIGHLIGHT: &str = "text-sm font-bold text-yellow-400";
pub const MAIN: &str = "px-4 pb-8";

pub const LOADING_SCREEN: &str = "min-h-screen flex items-center justify-center text-slate-300";
pub const ERROR_SCREEN: &str = "min-h-screen flex items-center justify-center text-red-400";

pub const GAME_STACK: &str = "flex flex-col items-center space-y-6";
pub const DIVIDER: &str = "w-full border-slate-700 my-4";
pub const SECTION_TITLE: &str = "w-full text-lg font-bold text-white flex items-center space-x-2 mb-3";

pub const WHEEL_CONTAINER: &str = "relative w-full flex flex-col items-center";
pub const WHEEL_CANVAS: &str = "w-full max-w-[360px] h-auto rounded-full";
pub const SPIN_BUTTON_ROW: &str = "w-full max-w-[300px] mt-4";
pub const SPIN_BUTTON_ACTIVE: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transform hover:-translate-y-0.5 active:translate-y-0 transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-500 to-gray-600 opacity-75 cursor-not-allowed";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-slate-800 border border-slate-700 hover:bg-slate-700 transition-all duration-300";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm px-6";
pub const MODAL_CONTENT: &str = "relative w-full max-w-sm bg-slate-800 border border-slate-700 rounded-2xl p-6 text-center shadow-xl";
pub const MODAL_ICON: &str = "text-5xl block mb-2";
pub const MODAL_TITLE: &str = "text-2xl font-bold mb-2 bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const MODAL_TEXT: &str = "text-slate-300 mb-4";
pub const MODAL_BUTTON_COLUMN: &str = "flex flex-col space-y-2";
pub const MODAL_CLOSE: &str = "absolute top-2 right-3 text-2xl text-slate-400 hover:text-white";

pub const TASK_LIST: &str = "w-full space-y-2";
pub const TASK_ITEM: &str = "flex items-center justify-between p-3 rounded-xl bg-slate-800 border border-slate-700 hover:border-yellow-500/50 cursor-pointer transition-colors";
pub const TASK_INFO: &str = "flex flex-col mr-3";
pub const TASK_NAME: &str = "font-medium text-white";
pub const TASK_DESC: &str = "text-xs text-slate-400";
pub const TASK_REWARD_BUTTON: &str = "shrink-0 px-3 py-1 rounded-full text-sm font-bold text-slate-900 bg-yellow-400";

pub const INVITE_SECTION: &str = "w-full mt-6 p-4 rounded-xl bg-slate-800 border border-slate-700";
pub const INVITE_TITLE: &str = "font-bold text-white mb-1";
pub const INVITE_TEXT: &str = "text-sm text-slate-400 mb-3";
pub const INVITE_INPUT_GROUP: &str = "flex items-center space-x-2";
pub const INVITE_INPUT: &str = "flex-1 min-w-0 px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-xs text-slate-300";
pub const BUTTON_COPY: &str = "shrink-0 px-3 py-2 rounded-lg text-sm font-medium text-slate-900 bg-yellow-400 hover:bg-yellow-300";

pub const DEBUG_ZONE: &str = "w-full mt-6 p-4 rounded-xl border border-dashed border-slate-600";
pub const DEBUG_TITLE: &str = "text-sm font-bold text-slate-400 mb-1";
pub const BUTTON_DEBUG: &str = "px-3 py-2 rounded-lg text-xs font-medium text-white bg-slate-700 hover:bg-slate-600";

pub const BUY_PANEL: &str = "w-full flex justify-center";
pub const BUY_BUTTON_MINI: &str = "flex items-center space-x-2 px-5 py-3 rounded-full font-bold text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg";
pub const COST_BADGE: &str = "text-xs font-normal bg-black/20 rounded-full px-2 py-0.5";
pub const QTY_ROW: &str = "flex items-center justify-center space-x-4 my-4";
pub const QTY_BUTTON: &str = "w-10 h-10 rounded-full text-xl font-bold bg-slate-700 hover:bg-slate-600 disabled:opacity-50";
pub const QTY_DISPLAY: &str = "w-12 text-center text-2xl font-bold";
pub const BUY_COST: &str = "text-slate-300";
pub const BUY_REMAINING: &str = "text-xs text-slate-400 mb-4";

pub const TEXT_ERROR: &str = "text-sm text-red-400";
pub const TEXT_SUCCESS: &str = "text-sm text-green-400";
pub const TEXT_SMALL: &str = "text-xs text-slate-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-slate-300";

pub const INPUT: &str = "mt-1 block w-full rounded-lg bg-slate-900 border border-slate-700 py-2 px-3 text-white placeholder:text-slate-500 focus:outline-none focus:ring-2 focus:ring-yellow-400";
pub const FORM: &str = "mt-3 space-y-3";

pub const ADMIN_CONTAINER: &str = "py-4";
pub const ADMIN_GRID: &str = "grid grid-cols-2 gap-3 mb-6";
pub const ADMIN_CARD: &str = "p-4 rounded-xl bg-slate-800 border border-slate-700";
pub const ADMIN_CARD_TITLE: &str = "text-xs uppercase tracking-wide text-slate-400";
pub const ADMIN_CARD_VALUE: &str = "text-2xl font-bold text-white";
pub const ADMIN_SECTION: &str = "mb-6 p-4 rounded-xl bg-slate-800 border border-slate-700";
