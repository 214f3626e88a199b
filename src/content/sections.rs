//! Static copy for every screen. Content only; layout and styling live
//! in `ui`.

use crate::lesson::Section;

/// Heading pair shown at the top of a section screen.
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub fn section_heading(section: Section) -> SectionHeading {
    match section {
        Section::Intro => SectionHeading {
            title: "RNNs & Time Series Forecasting",
            subtitle: "An interactive walkthrough",
        },
        Section::Rnn => SectionHeading {
            title: "Recurrent Neural Networks (RNNs)",
            subtitle: "Understanding how neural networks process sequential data",
        },
        Section::Lstm => SectionHeading {
            title: "Long Short-Term Memory Networks (LSTMs)",
            subtitle: "Advanced recurrent networks designed to overcome the limitations of standard RNNs",
        },
        Section::TimeSeries => SectionHeading {
            title: "Time-Series Forecasting",
            subtitle: "Using RNNs and LSTMs to predict future values based on historical patterns",
        },
        Section::StockPrediction => SectionHeading {
            title: "Stock Price Prediction",
            subtitle: "Hands-on application of RNNs and LSTMs for financial forecasting",
        },
        Section::McqTest => SectionHeading {
            title: "Knowledge Check",
            subtitle: "Test your understanding of RNNs, LSTMs, and Time-Series Forecasting",
        },
        Section::Summary => SectionHeading {
            title: "Congratulations!",
            subtitle: "You've completed the module on RNNs, LSTMs, and Time Series Forecasting.",
        },
    }
}

/// One info card in a step walkthrough: lead paragraphs, an optional
/// bullet list, closing paragraphs.
pub struct StepCard {
    pub title: &'static str,
    pub lead: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub closing: &'static [&'static str],
}

/// Cards for a multi-step section, indexed by `step - 1`.
pub fn step_cards(section: Section) -> &'static [StepCard] {
    match section {
        Section::Rnn => RNN_CARDS,
        Section::Lstm => LSTM_CARDS,
        Section::TimeSeries => TIMESERIES_CARDS,
        _ => &[],
    }
}

static RNN_CARDS: &[StepCard] = &[
    StepCard {
        title: "The Recurrent Structure",
        lead: &[
            "Unlike traditional neural networks, RNNs have connections that form directed \
             cycles, allowing them to maintain an internal state or \"memory\".",
        ],
        bullets: &[],
        closing: &[
            "This memory enables RNNs to process sequences of inputs, making them ideal for \
             tasks involving sequential data like text, speech, or time series.",
        ],
    },
    StepCard {
        title: "Information Flow Through Time",
        lead: &[
            "RNNs process data sequentially, one element at a time, while maintaining \
             information about what came before.",
            "At each time step, the network:",
        ],
        bullets: &[
            "Takes the current input",
            "Combines it with the previous hidden state",
            "Produces a new hidden state and output",
        ],
        closing: &["This recurrent connection allows information to persist across time steps."],
    },
    StepCard {
        title: "Limitations of Basic RNNs",
        lead: &[
            "While powerful, basic RNNs struggle with long-term dependencies due to the \
             vanishing gradient problem.",
            "As the sequence length increases, gradients either:",
        ],
        bullets: &[
            "Vanish (approach zero) - making it hard to learn long-range dependencies",
            "Explode (grow extremely large) - making training unstable",
        ],
        closing: &[
            "This limitation led to the development of more advanced architectures like LSTMs.",
        ],
    },
];

static LSTM_CARDS: &[StepCard] = &[
    StepCard {
        title: "LSTM Architecture",
        lead: &[
            "LSTMs are a special kind of RNN designed to remember information for long periods \
             of time.",
            "The key innovation is the cell state (the horizontal line running through the top \
             of the diagram), which acts as a conveyor belt of information.",
        ],
        bullets: &[],
        closing: &[
            "LSTMs can add or remove information to this cell state through carefully regulated \
             structures called gates.",
        ],
    },
    StepCard {
        title: "Forget Gate",
        lead: &[
            "The forget gate decides what information to throw away from the cell state.",
            "It looks at the previous hidden state and current input, and outputs a number \
             between 0 and 1 for each value in the cell state.",
        ],
        bullets: &[],
        closing: &[
            "A value of 1 means \"keep this completely\" while a value of 0 means \"get rid of \
             this completely.\"",
        ],
    },
    StepCard {
        title: "Input Gate",
        lead: &[
            "The input gate decides what new information to store in the cell state.",
            "This happens in two steps:",
        ],
        bullets: &[
            "A sigmoid layer decides which values to update",
            "A tanh layer creates candidate values that could be added",
        ],
        closing: &["These two are combined to update the cell state with new information."],
    },
    StepCard {
        title: "Output Gate",
        lead: &[
            "The output gate decides what parts of the cell state to output.",
            "First, a sigmoid layer decides what parts of the cell state to output.",
            "Then, the cell state is put through a tanh function and multiplied by the sigmoid \
             output.",
        ],
        bullets: &[],
        closing: &[
            "This ensures that we only output the parts we decided to, creating a filtered \
             version of the cell state as the hidden state.",
        ],
    },
];

static TIMESERIES_CARDS: &[StepCard] = &[
    StepCard {
        title: "What is Time-Series Forecasting?",
        lead: &[
            "Time-series forecasting is the process of using a model to predict future values \
             based on previously observed values.",
            "It's widely used in various domains:",
        ],
        bullets: &[
            "Financial markets (stock prices, exchange rates)",
            "Weather forecasting",
            "Sales and demand prediction",
            "Energy consumption forecasting",
        ],
        closing: &[
            "RNNs and LSTMs are particularly well-suited for this task due to their ability to \
             capture temporal dependencies.",
        ],
    },
    StepCard {
        title: "Preparing Time-Series Data",
        lead: &["Before feeding data into an RNN or LSTM, we need to prepare it appropriately:"],
        bullets: &[
            "Normalize the data to a similar scale",
            "Create sequences with a sliding window approach",
            "Split into input (X) and target (y) values",
            "Divide into training, validation, and test sets",
        ],
        closing: &[
            "The sliding window approach transforms the time series into a supervised learning \
             problem by creating input-output pairs.",
        ],
    },
    StepCard {
        title: "Model Training and Prediction",
        lead: &["The training process involves:"],
        bullets: &[
            "Feeding sequences of historical data to the model",
            "Comparing predictions with actual values",
            "Adjusting model weights to minimize error",
            "Validating on unseen data to prevent overfitting",
        ],
        closing: &[
            "For prediction we can use one-step forecasting (the next value only), multi-step \
             forecasting (several future values), or recursive forecasting (predictions fed back \
             in as inputs).",
        ],
    },
];

// --- Intro screen ---

pub static INTRO_BLURB: &str = "Explore the fascinating world of Recurrent Neural Networks \
    (RNNs) and Long Short-Term Memory networks (LSTMs). Learn how these powerful architectures \
    process sequential data and enable accurate time-series forecasting.";

pub static INTRO_TOPICS: &[&str] = &[
    "How RNNs process sequential information",
    "The architecture of LSTM networks",
    "Time-series forecasting techniques",
    "Hands-on: Stock price prediction",
];

// --- Stock lab "How It Works" cards ---

pub static LAB_CARDS: &[StepCard] = &[
    StepCard {
        title: "Data Preparation",
        lead: &["To train an RNN/LSTM model for stock price prediction, we first prepare the data:"],
        bullets: &[
            "Collect historical stock prices",
            "Normalize the data (typically using min-max scaling)",
            "Create sequences using a sliding window approach",
            "Split into training, validation, and test sets",
        ],
        closing: &[
            "The lookback window parameter determines how many previous days of data the model \
             considers when making a prediction.",
        ],
    },
    StepCard {
        title: "Model Architecture",
        lead: &["A typical LSTM model for stock prediction includes:"],
        bullets: &[
            "Input layer (shape determined by lookback window)",
            "One or more LSTM layers with dropout to prevent overfitting",
            "Dense (fully connected) output layer",
        ],
        closing: &[
            "The model learns to recognize patterns in the historical data that precede price \
             movements, allowing it to make predictions about future movements.",
        ],
    },
    StepCard {
        title: "Training Process",
        lead: &["The model is trained by:"],
        bullets: &[
            "Feeding sequences of historical prices",
            "Comparing predictions with actual prices",
            "Calculating loss (typically Mean Squared Error)",
            "Adjusting weights through backpropagation",
            "Repeating for multiple epochs until convergence",
        ],
        closing: &[
            "The trained model can then be used to predict future stock prices based on the most \
             recent data.",
        ],
    },
    StepCard {
        title: "Limitations and Considerations",
        lead: &["While powerful, stock prediction models have limitations:"],
        bullets: &[
            "Markets are influenced by unpredictable events",
            "Past performance doesn't guarantee future results",
            "Models can't account for all factors affecting prices",
            "High volatility periods are particularly challenging to predict",
        ],
        closing: &[
            "For more robust predictions, advanced models often incorporate additional features \
             beyond price history, such as trading volume, technical indicators, and even \
             sentiment analysis from news and social media.",
        ],
    },
];

// --- Summary screen ---

pub struct RecapCard {
    pub title: &'static str,
    pub tagline: &'static str,
    pub points: &'static [&'static str],
}

pub static RECAP_CARDS: &[RecapCard] = &[
    RecapCard {
        title: "Recurrent Neural Networks",
        tagline: "The foundation of sequential data processing",
        points: &[
            "Process sequential data with internal memory",
            "Information flows through time steps",
            "Limited by vanishing/exploding gradients",
        ],
    },
    RecapCard {
        title: "LSTM Networks",
        tagline: "Advanced recurrent architecture",
        points: &[
            "Specialized gates control information flow",
            "Better at capturing long-term dependencies",
            "Solves the vanishing gradient problem",
        ],
    },
    RecapCard {
        title: "Time-Series Forecasting",
        tagline: "Predicting future values",
        points: &[
            "Transforms time series into supervised learning",
            "Sliding window approach for sequence creation",
            "Applications in finance, weather, and more",
        ],
    },
];

pub static KEY_CONCEPTS: &[&str] = &[
    "How RNNs maintain internal state to process sequences",
    "The architecture of LSTM cells and their specialized gates",
    "How to prepare time-series data for neural networks",
    "Techniques for forecasting future values in a sequence",
];

pub static APPLICATIONS: &[&str] = &[
    "Financial market prediction and analysis",
    "Natural language processing and text generation",
    "Weather and climate forecasting",
    "Energy consumption prediction and optimization",
];

pub static COURSES: &[&str] = &[
    "Deep Learning Specialization (Coursera)",
    "Time Series Forecasting with TensorFlow",
    "Practical Time Series Analysis",
];

pub static BOOKS: &[&str] = &[
    "Deep Learning by Goodfellow, Bengio, and Courville",
    "LSTM: A Search Space Odyssey",
    "Forecasting: Principles and Practice",
];
